//! `graphql_compose`
//! =========
//!
//! _Composable, immutable GraphQL query building with exact wire-format printing._
//!
//! The **`graphql_compose`** library follows two goals:
//!
//! - To build GraphQL requests as plain values that can be shared, extended and merged
//! - To print them to exactly the compact text GraphQL services expect
//!
//! A [`Field`](builder::Field) is never changed in place. Selecting subfields, adding arguments,
//! or spreading fragments returns a new field, so partial selections can be kept around as
//! building blocks and combined freely. Selecting a field that's already selected merges both
//! selections instead of duplicating the field.
//!
//! Fragments are spread by name only. Their declarations live in a caller-owned
//! [`FragmentRegistry`](fragments::FragmentRegistry) and are appended to a request document when
//! it's printed, including fragments that are only spread by other fragments.
//!
//! The crate doesn't validate documents against a schema, nor does it execute them or perform any
//! I/O itself. The [`client`] module only defines a [`Transport`](client::Transport) seam that
//! callers implement using their HTTP client of choice.
//!
//! [A good place to start learning more about this crate is the `builder` module...](builder)

pub mod builder;
pub mod error;
pub mod fragments;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "json")]
pub mod client;
