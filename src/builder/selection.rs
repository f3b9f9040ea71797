use super::field::Field;
use crate::error::Result;

/// Input accepted by [`Field::add_subfields`].
///
/// A selection is shorthand for one or more fields:
///
/// - a name becomes a leaf field, e.g. `"id"` selects `id`
/// - a list selects each of its items, e.g. `["id", "name"]`
/// - a nested pair selects a field with subfields, e.g. `("author", "name")` selects
///   `author{name}`, without building the `author` field explicitly
/// - a built [`Field`] is selected as-is, including its arguments and fragments
///
/// Each of these is available through a `From` implementation, so most calls never name this
/// type explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Name(String),
    List(Vec<Selection>),
    Nested(String, Box<Selection>),
    Field(Field),
}

impl Selection {
    /// Create a nested selection for the field `name` with the given subfields.
    pub fn nested<S: Into<String>, T: Into<Selection>>(name: S, subfields: T) -> Self {
        Selection::Nested(name.into(), Box::new(subfields.into()))
    }

    /// Normalize this selection into a flat list of fields.
    pub(crate) fn into_fields(self) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        self.collect_into(&mut fields)?;
        Ok(fields)
    }

    fn collect_into(self, fields: &mut Vec<Field>) -> Result<()> {
        match self {
            Selection::Name(name) => fields.push(Field::new(name)?),
            Selection::List(list) => {
                for selection in list {
                    selection.collect_into(fields)?;
                }
            }
            Selection::Nested(name, subfields) => {
                fields.push(Field::new(name)?.add_subfields(*subfields)?);
            }
            Selection::Field(field) => fields.push(field),
        }
        Ok(())
    }
}

impl From<&str> for Selection {
    #[inline]
    fn from(name: &str) -> Self {
        Selection::Name(name.to_owned())
    }
}

impl From<String> for Selection {
    #[inline]
    fn from(name: String) -> Self {
        Selection::Name(name)
    }
}

impl From<Field> for Selection {
    #[inline]
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<&Field> for Selection {
    #[inline]
    fn from(field: &Field) -> Self {
        Selection::Field(field.clone())
    }
}

impl<T: Into<Selection>> From<Vec<T>> for Selection {
    fn from(list: Vec<T>) -> Self {
        Selection::List(list.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Selection>, const N: usize> From<[T; N]> for Selection {
    fn from(list: [T; N]) -> Self {
        Selection::List(list.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Selection>> From<(K, T)> for Selection {
    #[inline]
    fn from((name, subfields): (K, T)) -> Self {
        Selection::nested(name, subfields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    #[test]
    fn names_and_lists() {
        let fields = Selection::from(["a", "b"]).into_fields().unwrap();
        assert_eq!(fields, vec![Field::new("a").unwrap(), Field::new("b").unwrap()]);

        let fields = Selection::from(vec![Selection::from("a"), Selection::from(vec!["b", "c"])])
            .into_fields()
            .unwrap();
        let names: Vec<_> = fields.iter().map(Field::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn nested() {
        let fields = Selection::from(("subtest", "subsubtest")).into_fields().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), "subtest");
        assert_eq!(fields[0].subfields(), &[Field::new("subsubtest").unwrap()]);
    }

    #[test]
    fn nested_duplicates_are_merged() {
        let fields = Selection::from(("x", ["y", "y"])).into_fields().unwrap();
        assert_eq!(fields[0].subfields().len(), 1);
    }

    #[test]
    fn empty_names() {
        let err = Selection::from("").into_fields().unwrap_err();
        assert_eq!(err.error_type(), &ErrorType::InvalidName);
        Selection::from(("", "a")).into_fields().unwrap_err();
    }
}
