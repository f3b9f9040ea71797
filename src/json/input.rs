use serde_json::{Map as JSMap, Value as JSValue};

use crate::builder::{Arguments, Field, Number, Selection, Value};
use crate::error::{Error, ErrorType, Result};

/// Convert a [serde_json::Value] to an argument [Value].
///
/// Integers that fit into an `i64` are kept as integers, all other numbers become floats.
/// `null` has no argument value counterpart and is rejected with
/// [`ErrorType::InvalidArgument`]; top-level `null` arguments are dropped by
/// [`Field::add_arguments_json`] before conversion instead.
impl TryFrom<&JSValue> for Value {
    type Error = Error;

    fn try_from(value: &JSValue) -> Result<Self> {
        match value {
            JSValue::Null => Err(Error::new(
                "Received null for a nested argument value",
                ErrorType::InvalidArgument,
            )),
            JSValue::Bool(x) => Ok(Value::Boolean(*x)),
            JSValue::Number(num) => match num.as_i64() {
                Some(int) => Ok(Value::Number(Number::Int(int))),
                None => num
                    .as_f64()
                    .map(|float| Value::Number(Number::Float(float)))
                    .ok_or_else(|| {
                        Error::new_with_context(
                            "Received a number that can't be represented",
                            num.to_string(),
                            ErrorType::InvalidArgument,
                        )
                    }),
            },
            JSValue::String(str) => Ok(Value::String(str.clone())),
            JSValue::Array(list) => list
                .iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            JSValue::Object(obj) => object_to_arguments(obj, false).map(Value::Object),
        }
    }
}

fn object_to_arguments(obj: &JSMap<String, JSValue>, skip_null: bool) -> Result<Arguments> {
    let mut arguments = Arguments::with_capacity(obj.len());
    for (key, value) in obj.iter() {
        if skip_null && value.is_null() {
            continue;
        }
        arguments.insert(key.clone(), Value::try_from(value)?);
    }
    Ok(arguments)
}

/// Convert a [serde_json::Value] to a [Selection].
///
/// Strings select a field by name, arrays select each of their items, and objects select each of
/// their keys with the key's value as its subfields, e.g. `{"author": ["id", "name"]}`. Any other
/// value is rejected with [`ErrorType::InvalidSubfield`].
impl TryFrom<&JSValue> for Selection {
    type Error = Error;

    fn try_from(value: &JSValue) -> Result<Self> {
        match value {
            JSValue::String(name) => Ok(Selection::Name(name.clone())),
            JSValue::Array(list) => list
                .iter()
                .map(Selection::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Selection::List),
            JSValue::Object(obj) => obj
                .iter()
                .map(|(name, subfields)| {
                    Selection::try_from(subfields).map(|subfields| Selection::nested(name.clone(), subfields))
                })
                .collect::<Result<Vec<_>>>()
                .map(Selection::List),
            _ => Err(Error::new_with_context(
                "Invalid subfield data",
                value.to_string(),
                ErrorType::InvalidSubfield,
            )),
        }
    }
}

impl Field {
    /// Overlay arguments given as a JSON object, e.g. `{"first": 10, "after": null}`.
    ///
    /// Top-level `null` entries are dropped, like `None` values passed to
    /// [`Field::add_arguments`]. Fails with [`ErrorType::InvalidArgument`] if `args` isn't an
    /// object or contains a nested `null`.
    pub fn add_arguments_json(&self, args: &JSValue) -> Result<Field> {
        match args {
            JSValue::Object(obj) => {
                let arguments = object_to_arguments(obj, true)?;
                self.add_arguments(arguments)
            }
            _ => Err(Error::new_with_context(
                "Arguments must be an object",
                args.to_string(),
                ErrorType::InvalidArgument,
            )),
        }
    }

    /// Select subfields given as JSON, see the [Selection] conversion from JSON values.
    pub fn add_subfields_json(&self, selection: &JSValue) -> Result<Field> {
        self.add_subfields(Selection::try_from(selection)?)
    }

    /// Spread fragments given as a JSON string or an array of strings.
    ///
    /// Fails with [`ErrorType::InvalidFragmentName`] if any name isn't a string.
    pub fn add_fragments_json(&self, names: &JSValue) -> Result<Field> {
        let names = match names {
            JSValue::Array(list) => list.iter().collect(),
            name => vec![name],
        };
        let names = names
            .into_iter()
            .map(|name| match name {
                JSValue::String(name) => Ok(name.as_str()),
                _ => Err(Error::new_with_context(
                    "Invalid fragment name",
                    name.to_string(),
                    ErrorType::InvalidFragmentName,
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        self.add_fragments(names)
    }
}
