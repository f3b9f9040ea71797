//! Builder operations that combine a [Field] with new arguments, subfields, or fragment spreads.
//!
//! None of these mutate the field they're called on. Each returns a new field, which makes them
//! chainable with `?`:
//!
//! ```
//! use graphql_compose::builder::*;
//!
//! # fn main() -> graphql_compose::error::Result<()> {
//! let field = Field::new("user")?
//!     .add_arguments([("id", Value::from(42))])?
//!     .add_subfields(["id", "name"])?
//!     .add_fragments(["UserInfo"])?;
//!
//! assert_eq!(field.print(), "user(id:42){id,name,...UserInfo}");
//! # Ok(())
//! # }
//! ```

use super::{field::Field, selection::Selection, value::*};
use crate::error::{Error, ErrorType, Result};

impl Field {
    /// Overlay arguments onto this field's arguments, key by key.
    ///
    /// Entries whose value is `None` are dropped. Existing keys are overwritten wholesale, which
    /// means that object values aren't merged deeply, and keep their original position.
    ///
    /// Fails with [`ErrorType::InvalidArgument`] if a key is empty or a value, at any depth,
    /// is a non-finite number.
    pub fn add_arguments<I, K, V>(&self, args: I) -> Result<Field>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Option<Value>>,
    {
        let args: Arguments = args
            .into_iter()
            .filter_map(|(key, value)| value.into().map(|value| (key.into(), value)))
            .collect();
        validate_arguments(&args)?;
        Ok(self.with_arguments(args))
    }

    /// Select additional subfields on this field.
    ///
    /// New fields are merged into the existing subfields by name. A field that isn't selected
    /// yet is appended. A field that is selected already is merged recursively with the new
    /// one, combining subfields, fragments and arguments, and the merged field then moves to the
    /// end of its siblings. For example, re-adding `p` to a field selecting `p,q` results in
    /// `q,p`.
    ///
    /// Fails with [`ErrorType::InvalidName`] if the selection contains an empty name.
    pub fn add_subfields<S: Into<Selection>>(&self, selection: S) -> Result<Field> {
        let mut subfields = self.subfields.clone();
        for field in selection.into().into_fields()? {
            merge_by_name(&mut subfields, field);
        }
        Ok(Field {
            subfields,
            ..self.clone()
        })
    }

    /// Spread additional fragments into this field.
    ///
    /// New names are appended in the order given, while names that are already spread are
    /// ignored, so adding the same fragment twice is a no-op.
    ///
    /// Fails with [`ErrorType::InvalidFragmentName`] if a name isn't a valid GraphQL name
    /// (`/[_A-Za-z][_0-9A-Za-z]*/`). Spreads are printed verbatim as `...Name`, so anything else
    /// would produce an unparseable document. Field names and argument keys, in contrast, only
    /// have to be non-empty, since aliases and other syntax may be written through them.
    pub fn add_fragments<I, S>(&self, names: I) -> Result<Field>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fragments = self.fragments.clone();
        for name in names {
            let name = name.into();
            if !is_name(&name) {
                return Err(Error::new_with_context(
                    "Invalid fragment name",
                    name,
                    ErrorType::InvalidFragmentName,
                ));
            }
            if !fragments.contains(&name) {
                fragments.push(name);
            }
        }
        Ok(Field {
            fragments,
            ..self.clone()
        })
    }

    pub(crate) fn with_arguments(&self, args: Arguments) -> Field {
        let mut arguments = self.arguments.clone();
        arguments.extend(args);
        Field {
            arguments,
            ..self.clone()
        }
    }

    /// Merge a field of the same name onto this one.
    fn merge(&self, other: Field) -> Field {
        let mut subfields = self.subfields.clone();
        for field in other.subfields {
            merge_by_name(&mut subfields, field);
        }
        let mut fragments = self.fragments.clone();
        for name in other.fragments {
            if !fragments.contains(&name) {
                fragments.push(name);
            }
        }
        let mut arguments = self.arguments.clone();
        arguments.extend(other.arguments);
        Field {
            name: self.name.clone(),
            arguments,
            subfields,
            fragments,
        }
    }
}

/// Append `field` to `fields`, or replace a field of the same name with the merge of both and
/// move it to the end.
fn merge_by_name(fields: &mut Vec<Field>, field: Field) {
    match fields.iter().position(|existing| existing.name == field.name) {
        Some(index) => {
            let existing = fields.remove(index);
            fields.push(existing.merge(field));
        }
        None => fields.push(field),
    }
}

/// Whether `name` matches `/[_A-Za-z][_0-9A-Za-z]*/`.
/// [Reference](https://spec.graphql.org/October2021/#Name)
pub(crate) fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Field {
        Field::new("test").unwrap()
    }

    fn names(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(Field::name).collect()
    }

    #[test]
    fn arguments_do_not_modify_inputs() {
        let field = base();
        let with_args = field.add_arguments([("foo", Value::from(42))]).unwrap();
        assert!(field.arguments().is_empty());
        assert_eq!(with_args.arguments().get("foo"), Some(&Value::from(42)));
    }

    #[test]
    fn arguments_merge() {
        let field = base().add_arguments([("foo", Value::from(42))]).unwrap();
        let merged = field.add_arguments([("bar", Value::from(43))]).unwrap();
        assert_eq!(merged.arguments().len(), 2);
        assert_eq!(merged.arguments().get("foo"), Some(&Value::from(42)));
        assert_eq!(merged.arguments().get("bar"), Some(&Value::from(43)));

        let reversed = base()
            .add_arguments([("bar", Value::from(43))])
            .unwrap()
            .add_arguments([("foo", Value::from(42))])
            .unwrap();
        assert_eq!(merged, reversed);

        let overridden = field.add_arguments([("foo", Value::from(43))]).unwrap();
        assert_eq!(overridden.arguments().len(), 1);
        assert_eq!(overridden.arguments().get("foo"), Some(&Value::from(43)));
    }

    #[test]
    fn arguments_shallow_overwrite() {
        let first: Value = [("a", 1), ("b", 2)].into_iter().collect();
        let second: Value = [("c", 3)].into_iter().collect();
        let field = base()
            .add_arguments([("obj", first)])
            .unwrap()
            .add_arguments([("obj", second.clone())])
            .unwrap();
        assert_eq!(field.arguments().get("obj"), Some(&second));
    }

    #[test]
    fn arguments_drop_none() {
        let field = base()
            .add_arguments([("after", None), ("first", Some(Value::from(10)))])
            .unwrap();
        assert_eq!(field.arguments().keys().collect::<Vec<_>>(), vec!["first"]);
    }

    #[test]
    fn arguments_invalid() {
        let err = base()
            .add_arguments([("ratio", Value::from(f64::NAN))])
            .unwrap_err();
        assert_eq!(err.error_type(), &ErrorType::InvalidArgument);
        assert_eq!(err.context(), Some("ratio"));
        base().add_arguments([("", Value::from(1))]).unwrap_err();
    }

    #[test]
    fn subfields_from_name() {
        let field = base();
        let with_subfield = field.add_subfields("subtest").unwrap();
        assert!(field.subfields().is_empty());
        assert_eq!(with_subfield.subfields(), &[Field::new("subtest").unwrap()]);
    }

    #[test]
    fn subfields_from_nested() {
        let field = base().add_subfields(("subtest", "subsubtest")).unwrap();
        let expected = Field::new("subtest")
            .unwrap()
            .add_subfields("subsubtest")
            .unwrap();
        assert_eq!(field.subfields(), &[expected]);
    }

    #[test]
    fn subfields_from_list_and_field() {
        let field = base().add_subfields(["subtest1", "subtest2"]).unwrap();
        assert_eq!(names(field.subfields()), vec!["subtest1", "subtest2"]);

        let built = Field::new("subtest")
            .unwrap()
            .add_arguments([("first", Value::from(1))])
            .unwrap();
        let field = base().add_subfields(built.clone()).unwrap();
        assert_eq!(field.subfields(), &[built]);
    }

    #[test]
    fn subfields_merge() {
        let field = base().add_subfields("subtest1").unwrap();
        let merged = field.add_subfields("subtest2").unwrap();
        assert_eq!(names(merged.subfields()), vec!["subtest1", "subtest2"]);
        let merged = field.add_subfields("subtest1").unwrap();
        assert_eq!(names(merged.subfields()), vec!["subtest1"]);
    }

    #[test]
    fn subfields_merge_nested() {
        let field = base().add_subfields(("x", ("y", "a"))).unwrap();
        let merged = field.add_subfields(("x", ("y", "b"))).unwrap();
        assert_eq!(names(merged.subfields()), vec!["x"]);
        let x = merged.subfield("x").unwrap();
        assert_eq!(names(x.subfields()), vec!["y"]);
        assert_eq!(names(x.subfield("y").unwrap().subfields()), vec!["a", "b"]);

        let field = base().add_subfields(("subtest", "subsubtest1")).unwrap();
        let merged = field.add_subfields(("subtest", "subsubtest1")).unwrap();
        assert_eq!(names(merged.subfields()[0].subfields()), vec!["subsubtest1"]);
    }

    #[test]
    fn subfields_merge_moves_to_end() {
        let field = base().add_subfields(["p", "q"]).unwrap();
        let merged = field.add_subfields("p").unwrap();
        assert_eq!(names(merged.subfields()), vec!["q", "p"]);

        let field = base().add_subfields(["a", "b", "c"]).unwrap();
        let merged = field.add_subfields(["a", "b"]).unwrap();
        assert_eq!(names(merged.subfields()), vec!["c", "a", "b"]);
    }

    #[test]
    fn subfields_merge_combines_arguments_and_fragments() {
        let field = base()
            .add_subfields(Field::new("user").unwrap().add_fragments(["A"]).unwrap())
            .unwrap();
        let other = Field::new("user")
            .unwrap()
            .add_arguments([("id", Value::from(1))])
            .unwrap()
            .add_fragments(["B", "A"])
            .unwrap()
            .add_subfields("name")
            .unwrap();
        let merged = field.add_subfields(other).unwrap();
        let user = merged.subfield("user").unwrap();
        assert_eq!(user.fragments(), &["A".to_string(), "B".to_string()]);
        assert_eq!(user.arguments().get("id"), Some(&Value::from(1)));
        assert_eq!(names(user.subfields()), vec!["name"]);
    }

    #[test]
    fn subfields_unique_within_one_call() {
        let field = base().add_subfields(["a", "b", "a"]).unwrap();
        assert_eq!(names(field.subfields()), vec!["b", "a"]);
    }

    #[test]
    fn fragments_add() {
        let field = base();
        let with_fragments = field.add_fragments(["fragtest1", "fragtest2"]).unwrap();
        assert!(field.fragments().is_empty());
        assert_eq!(with_fragments.fragments(), &["fragtest1", "fragtest2"]);
    }

    #[test]
    fn fragments_merge() {
        let field = base().add_fragments(["fragtest1"]).unwrap();
        let merged = field.add_fragments(["fragtest2"]).unwrap();
        assert_eq!(merged.fragments(), &["fragtest1", "fragtest2"]);
        let merged = field.add_fragments(["fragtest1"]).unwrap();
        assert_eq!(merged.fragments(), &["fragtest1"]);
        assert_eq!(merged, field);
    }

    #[test]
    fn fragments_invalid() {
        for name in ["", "1abc", "with space", "...Frag"] {
            let err = base().add_fragments([name]).unwrap_err();
            assert_eq!(err.error_type(), &ErrorType::InvalidFragmentName);
        }
        base().add_fragments(["_private", "Frag2"]).unwrap();
    }
}
