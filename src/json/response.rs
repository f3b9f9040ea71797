use serde::Deserialize;
use serde_json::{Map as JSMap, Value as JSValue};

use crate::error::{Error, ErrorType, Result};

/// A single entry of a GraphQL response's `errors` list.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Errors)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

/// The envelope of a GraphQL response body, `{ "data": ..., "errors": [...] }`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Response-Format)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: JSValue,
    #[serde(default)]
    pub errors: Option<Vec<ResponseError>>,
}

impl Response {
    /// Read a response envelope from a parsed JSON body.
    pub fn from_value(body: JSValue) -> Result<Self> {
        serde_json::from_value(body).map_err(|err| {
            Error::new_with_context(
                "Received a malformed GraphQL response",
                err.to_string(),
                ErrorType::Response,
            )
        })
    }

    /// Returns the response's `data`, or an error combining all error messages.
    ///
    /// Messages are joined with `". "`. A missing `data` property is returned as `null`.
    pub fn into_data(self) -> Result<JSValue> {
        match self.errors {
            Some(errors) if !errors.is_empty() => {
                let message = errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join(". ");
                Err(Error::new(message, ErrorType::Response))
            }
            _ => Ok(self.data),
        }
    }
}

/// Replace every connection object of the shape `{ "edges": [{ "node": ... }] }` in `value` by
/// the list of its nodes.
///
/// Nodes, lists and all other objects are reshaped recursively, so nested connections are
/// flattened as well. An edge without a `node` becomes `null`.
pub fn remove_edges(value: JSValue) -> JSValue {
    match value {
        JSValue::Array(list) => JSValue::Array(list.into_iter().map(remove_edges).collect()),
        JSValue::Object(mut obj) if obj.get("edges").map_or(false, JSValue::is_array) => {
            match obj.remove("edges") {
                Some(JSValue::Array(edges)) => JSValue::Array(
                    edges
                        .into_iter()
                        .map(|edge| match edge {
                            JSValue::Object(mut edge) => {
                                remove_edges(edge.remove("node").unwrap_or(JSValue::Null))
                            }
                            _ => JSValue::Null,
                        })
                        .collect(),
                ),
                _ => JSValue::Null,
            }
        }
        JSValue::Object(obj) => JSValue::Object(remove_object_edges(obj)),
        value => value,
    }
}

fn remove_object_edges(obj: JSMap<String, JSValue>) -> JSMap<String, JSValue> {
    obj.into_iter()
        .map(|(key, value)| (key, remove_edges(value)))
        .collect()
}
