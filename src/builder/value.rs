use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::time::SystemTime;

use crate::error::{Error, ErrorType, Result};

/// Map of argument names to their values, kept in insertion order.
///
/// Overwriting an existing key keeps its original position, so printing stays deterministic
/// across repeated merges.
pub type Arguments = IndexMap<String, Value>;

/// A numeric argument value.
///
/// Integers and floats are kept apart so that integers print without a fractional part.
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Whether the number can be printed as a GraphQL literal, i.e. isn't `NaN` or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(float) => float.is_finite(),
        }
    }
}

/// Value of a field argument.
///
/// This is a closed set of variants; every value a GraphQL argument may hold in a document built
/// by this crate is one of them. Values are most conveniently created through their `From`
/// implementations, while enum references, which print unquoted, use [`Value::enumeration`].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Boolean(bool),
    /// An instant in time, printed as an ISO-8601 string with millisecond precision in UTC.
    DateTime(DateTime<Utc>),
    /// A symbolic constant that's printed as a bare name, e.g. `MOBILE_WEB`.
    Enum(String),
    List(Vec<Value>),
    Object(Arguments),
}

impl Value {
    /// Create an enum reference value, which is printed without quotes.
    pub fn enumeration<S: Into<String>>(name: S) -> Self {
        Value::Enum(name.into())
    }

    /// Returns whether this value and all its children can be printed as a GraphQL literal.
    pub(crate) fn validate(&self, key: &str) -> Result<()> {
        match self {
            Value::Number(number) if !number.is_finite() => Err(Error::new_with_context(
                "Argument values must be finite numbers",
                key,
                ErrorType::InvalidArgument,
            )),
            Value::List(list) => list.iter().try_for_each(|value| value.validate(key)),
            Value::Object(object) => validate_arguments(object),
            _ => Ok(()),
        }
    }
}

/// Check every key and value of an argument map before it's merged onto a field.
pub(crate) fn validate_arguments(args: &Arguments) -> Result<()> {
    for (key, value) in args.iter() {
        if key.is_empty() {
            return Err(Error::new(
                "Argument names must not be empty",
                ErrorType::InvalidArgument,
            ));
        }
        value.validate(key)?;
    }
    Ok(())
}

macro_rules! from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                #[inline]
                fn from(value: $int) -> Self {
                    Value::Number(Number::Int(i64::from(value)))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(int) => Value::Number(Number::Int(int)),
            Err(_) => Value::Number(Number::Float(value as f64)),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl From<SystemTime> for Value {
    #[inline]
    fn from(value: SystemTime) -> Self {
        Value::DateTime(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Arguments> for Value {
    #[inline]
    fn from(object: Arguments) -> Self {
        Value::Object(object)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Collect key-value pairs into an object value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
