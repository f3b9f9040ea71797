//! # GraphQL Field Builders
//!
//! The `graphql_compose::builder` module contains the immutable [`Field`] tree, the argument
//! [`Value`] model, and traits to print fields into GraphQL source text.
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`Field`], a selection with arguments, subfields and fragment spreads
//! - [`Value`], the closed set of values an argument may hold
//! - [`Selection`], shorthand input for selecting subfields
//! - [`PrintNode`], a trait using which fields and values are printed into compact source text
//! - [`pretty_print`], which reformats compact source text for display
//!
//! The following workflow describes the minimum that's done using this module.
//!
//! ```
//! use graphql_compose::builder::*;
//!
//! # fn main() -> graphql_compose::error::Result<()> {
//! // Create a root field and select some nested subfields
//! let viewer = Field::new("viewer")?
//!     .add_subfields(["login", "name"])?
//!     .add_subfields(("repositories", "name"))?;
//!
//! // Wrap it in a query and print it to its wire format
//! let query = Operation::query(viewer);
//! assert_eq!(query.print(), "query{viewer{login,name,repositories{name}}}");
//! # Ok(())
//! # }
//! ```

mod field;
mod merge;
mod operation;
mod printer;
mod selection;
mod value;

pub mod pretty;

pub use field::Field;
pub use operation::{Operation, OperationKind};
pub use pretty::{pretty_print, DEFAULT_INDENT};
pub use printer::PrintNode;
pub use selection::Selection;
pub use value::{Arguments, Number, Value};
