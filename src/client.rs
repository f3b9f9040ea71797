//! # GraphQL Client
//!
//! The [Client] ties the builders to a GraphQL service: it prints a request document including
//! all required fragment declarations, hands it to a [Transport], and unwraps the response.
//!
//! This crate doesn't ship an HTTP implementation. A [Transport] receives an [HttpRequest], which
//! describes the service's URI and the `token` and `query` query-string parameters, and returns the
//! parsed JSON response body.
//!
//! ```
//! use graphql_compose::{builder::*, client::*, error::Result, fragments::FragmentRegistry};
//! use serde_json::{json, Value as JSValue};
//!
//! # fn main() -> Result<()> {
//! let transport = |request: &HttpRequest<'_>| -> Result<JSValue> {
//!     assert_eq!(request.query, "query{viewer{login}}");
//!     Ok(json!({ "data": { "viewer": { "login": "octocat" } } }))
//! };
//!
//! let config = ClientConfig::new("https://api.example.com/graphql", "secret");
//! let client = Client::new(config, FragmentRegistry::new(), transport)?;
//!
//! let query = Operation::query(Field::new("viewer")?.add_subfields("login")?);
//! assert_eq!(client.send(&query)?, json!({ "viewer": { "login": "octocat" } }));
//! # Ok(())
//! # }
//! ```

use serde_json::Value as JSValue;

use crate::error::{Error, ErrorType, Result};
use crate::fragments::{print_document, Executable, FragmentRegistry};
use crate::json::{remove_edges, Response};

/// Settings of a [Client].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// The GraphQL service's endpoint.
    pub uri: String,
    /// The token sent alongside every request.
    pub token: String,
    /// Whether to flatten connection objects in responses, see [remove_edges].
    pub remove_edges: bool,
}

impl ClientConfig {
    pub fn new<U: Into<String>, T: Into<String>>(uri: U, token: T) -> Self {
        ClientConfig {
            uri: uri.into(),
            token: token.into(),
            remove_edges: false,
        }
    }

    pub fn remove_edges(mut self, remove_edges: bool) -> Self {
        self.remove_edges = remove_edges;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            Err(Error::new("URI required", ErrorType::Configuration))
        } else if self.token.is_empty() {
            Err(Error::new("token required", ErrorType::Configuration))
        } else {
            Ok(())
        }
    }
}

/// A request for a [Transport] to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<'a> {
    pub uri: &'a str,
    pub token: &'a str,
    /// The printed request document.
    pub query: String,
}

impl<'a> HttpRequest<'a> {
    /// The query-string parameters of this request.
    pub fn query_params(&self) -> [(&str, &str); 2] {
        [("token", self.token), ("query", &self.query)]
    }
}

/// Sends requests to a GraphQL service.
///
/// Implementations return the parsed JSON body of the response and report failures to deliver a
/// request with [`ErrorType::Transport`]. GraphQL errors contained in a response body are
/// handled by the [Client] instead.
///
/// Closures taking an [HttpRequest] implement this trait.
pub trait Transport {
    fn execute(&self, request: &HttpRequest<'_>) -> Result<JSValue>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest<'_>) -> Result<JSValue>,
{
    #[inline]
    fn execute(&self, request: &HttpRequest<'_>) -> Result<JSValue> {
        self(request)
    }
}

/// Sends fields and operations to a GraphQL service through a [Transport].
pub struct Client<T> {
    config: ClientConfig,
    fragments: FragmentRegistry,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Create a client for the declared fragments.
    ///
    /// Fails with [`ErrorType::Configuration`] if the configuration lacks a URI or a token.
    pub fn new(config: ClientConfig, fragments: FragmentRegistry, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Client {
            config,
            fragments,
            transport,
        })
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    /// Build the request that [`Client::send`] hands to the transport.
    pub fn request<E: Executable + ?Sized>(&self, executable: &E) -> Result<HttpRequest<'_>> {
        Ok(HttpRequest {
            uri: &self.config.uri,
            token: &self.config.token,
            query: print_document(executable, &self.fragments)?,
        })
    }

    /// Send a field or operation and return the response's `data`.
    ///
    /// Fails with [`ErrorType::UndeclaredFragment`] before anything is sent if a spread fragment
    /// isn't declared, and with [`ErrorType::Response`] if the service answers with errors.
    pub fn send<E: Executable + ?Sized>(&self, executable: &E) -> Result<JSValue> {
        let request = self.request(executable)?;
        let body = self.transport.execute(&request)?;
        let data = Response::from_value(body)?.into_data()?;
        if self.config.remove_edges {
            Ok(remove_edges(data))
        } else {
            Ok(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn config() -> ClientConfig {
        ClientConfig::new("uri", "token")
    }

    fn respond(body: JSValue) -> impl Fn(&HttpRequest<'_>) -> Result<JSValue> {
        move |_request| Ok(body.clone())
    }

    #[test]
    fn requires_uri_and_token() {
        let registry = FragmentRegistry::new;
        let err = Client::new(ClientConfig::default(), registry(), respond(json!({}))).err();
        assert_eq!(err.map(|err| err.error_type().clone()), Some(ErrorType::Configuration));
        Client::new(ClientConfig::new("uri", ""), registry(), respond(json!({}))).err().unwrap();
        Client::new(ClientConfig::new("", "token"), registry(), respond(json!({}))).err().unwrap();
        Client::new(config(), registry(), respond(json!({}))).unwrap();
    }

    #[test]
    fn sends_document_with_fragments() {
        let sent = RefCell::new(Vec::new());
        let transport = |request: &HttpRequest<'_>| -> Result<JSValue> {
            sent.borrow_mut().push(request.query.clone());
            assert_eq!(request.query_params()[0], ("token", "token"));
            Ok(json!({ "data": { "f": { "g": 1 } } }))
        };
        let registry = FragmentRegistry::new().with(
            "Frag",
            Field::fragment("Frag", "Type").unwrap().add_subfields("g").unwrap(),
        );
        let client = Client::new(config(), registry, transport).unwrap();
        let query = Operation::query(Field::new("f").unwrap().add_fragments(["Frag"]).unwrap());
        let data = client.send(&query).unwrap();
        assert_eq!(data, json!({ "f": { "g": 1 } }));
        assert_eq!(
            sent.borrow().as_slice(),
            &["query{f{...Frag}}fragment Frag on Type{g}".to_string()]
        );
    }

    #[test]
    fn undeclared_fragment_is_not_sent() {
        let sent = RefCell::new(0);
        let transport = |_request: &HttpRequest<'_>| -> Result<JSValue> {
            *sent.borrow_mut() += 1;
            Ok(json!({ "data": null }))
        };
        let client = Client::new(config(), FragmentRegistry::new(), transport).unwrap();
        let field = Field::new("f").unwrap().add_fragments(["Frag"]).unwrap();
        let err = client.send(&field).unwrap_err();
        assert_eq!(err.fragment_name(), Some("Frag"));
        assert_eq!(*sent.borrow(), 0);
    }

    #[test]
    fn response_errors() {
        let body = json!({ "errors": [{ "message": "a" }, { "message": "b" }] });
        let client = Client::new(config(), FragmentRegistry::new(), respond(body)).unwrap();
        let err = client.send(&Field::new("f").unwrap()).unwrap_err();
        assert_eq!(err.message(), "a. b");
    }

    #[test]
    fn transport_errors() {
        let transport = |_request: &HttpRequest<'_>| -> Result<JSValue> {
            Err(Error::new("connection refused", ErrorType::Transport))
        };
        let client = Client::new(config(), FragmentRegistry::new(), transport).unwrap();
        let err = client.send(&Field::new("f").unwrap()).unwrap_err();
        assert_eq!(err.error_type(), &ErrorType::Transport);
    }

    #[test]
    fn removes_edges() {
        let body = json!({ "data": { "repos": { "edges": [{ "node": { "name": "a" } }] } } });
        let flattening = config().remove_edges(true);
        let client = Client::new(flattening, FragmentRegistry::new(), respond(body.clone())).unwrap();
        let field = Field::new("repos").unwrap().add_subfields(("edges", ("node", "name"))).unwrap();
        assert_eq!(client.send(&field).unwrap(), json!({ "repos": [{ "name": "a" }] }));

        let client = Client::new(config(), FragmentRegistry::new(), respond(body)).unwrap();
        assert_eq!(
            client.send(&field).unwrap(),
            json!({ "repos": { "edges": [{ "node": { "name": "a" } }] } })
        );
    }
}
