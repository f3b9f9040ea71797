//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned by every fallible builder
//! operation, by the fragment resolver, and by the client.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure.
///
/// The error is split into a general message and an optional context string. For argument
/// validation, for instance, the context is populated with the offending argument key, while for
/// subfield validation it holds the rejected input.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] describes.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorType {
    /// A field or fragment declaration was created with an empty name.
    InvalidName,
    /// An argument value can't be represented as a GraphQL literal.
    InvalidArgument,
    /// Subfield input was neither a name, a list, a nested selection, nor a built field.
    InvalidSubfield,
    /// A fragment reference isn't a valid fragment name.
    InvalidFragmentName,
    /// A referenced fragment has no declaration in the fragment registry.
    UndeclaredFragment(String),
    /// The client was configured without a URI or a token.
    Configuration,
    /// A transport failed to deliver a request.
    Transport,
    /// The GraphQL service answered with errors.
    Response,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>, C: Into<String>>(
        message: S,
        context: C,
        error_type: ErrorType,
    ) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type,
        }
    }

    /// Create the error for a fragment name that is missing from a registry.
    pub fn undeclared_fragment<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Self::new(
            format!("Undeclared fragment: {}", name),
            ErrorType::UndeclaredFragment(name),
        )
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the context of the current error, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }

    /// Returns the missing fragment's name when this is an undeclared fragment error.
    pub fn fragment_name(&self) -> Option<&str> {
        match self.error_type {
            ErrorType::UndeclaredFragment(ref name) => Some(name),
            _ => None,
        }
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let prefix = match self.error_type {
            ErrorType::InvalidName => "Invalid Name",
            ErrorType::InvalidArgument => "Invalid Argument",
            ErrorType::InvalidSubfield => "Invalid Subfield",
            ErrorType::InvalidFragmentName => "Invalid Fragment Name",
            ErrorType::UndeclaredFragment(_) => "Undeclared Fragment",
            ErrorType::Configuration => "Configuration Error",
            ErrorType::Transport => "Transport Error",
            ErrorType::Response => "GraphQL Error",
        };
        let formatted = format!("{}: {}", prefix, self.message);

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_with_context() {
        let error = Error::new_with_context("Argument value is not finite", "foo", ErrorType::InvalidArgument);
        assert_eq!(error.print(false), "Invalid Argument: Argument value is not finite");
        assert_eq!(
            error.to_string(),
            "Invalid Argument: Argument value is not finite\nfoo"
        );
    }

    #[test]
    fn undeclared_fragment_name() {
        let error = Error::undeclared_fragment("Frag");
        assert_eq!(error.fragment_name(), Some("Frag"));
        assert_eq!(error.message(), "Undeclared fragment: Frag");
        assert_eq!(Error::new("x", ErrorType::Response).fragment_name(), None);
    }
}
