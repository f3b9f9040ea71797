//! # Fragment Resolution
//!
//! Fields only spread fragments by name, e.g. `viewer{...UserInfo}`. Before a document can be
//! sent, the declarations of all fragments it spreads, directly or through other fragments, must
//! be appended to it. The `graphql_compose::fragments` module contains:
//!
//! - [`FragmentRegistry`], the caller-owned map of fragment names to declarations
//! - [`resolve_fragments`], which lists the declarations a field requires
//! - [`print_document`], which prints an [`Executable`] together with its declarations

mod registry;
mod resolve;

pub use registry::FragmentRegistry;
pub use resolve::{fragment_names, print_document, resolve_fragments, Executable};
