//! # JSON Conversion
//!
//! The `graphql_compose::json` module contains utilities to convert from and to `serde_json`
//! values.
//!
//! Builder inputs may be given as JSON when their shape is only known at runtime:
//!
//! - [`Field::add_arguments_json`](crate::builder::Field::add_arguments_json) accepts an
//!   object of arguments, dropping `null` entries.
//! - [`Field::add_subfields_json`](crate::builder::Field::add_subfields_json) accepts strings,
//!   arrays, and objects as nested selections.
//! - [`Field::add_fragments_json`](crate::builder::Field::add_fragments_json) accepts a string
//!   or an array of strings.
//!
//! Responses are handled by a handful of utilities:
//!
//! - [Response] reads a response body's `data` and `errors` and turns errors into an [Error].
//! - [remove_edges] flattens connection objects (`{ edges: [{ node }] }`) into lists of nodes.
//!
//! [Error]: crate::error::Error

mod input;
mod response;

pub use response::*;
