use super::{merge::is_name, value::Arguments};
use crate::error::{Error, ErrorType, Result};

/// A single GraphQL selection together with its arguments, subfields and fragment spreads.
///
/// A `Field` is an immutable value. Every builder method, like [`Field::add_subfields`], takes the
/// field by reference and returns a new field, so a partially built field may be reused as the
/// base for several different selections without any of them interfering with each other.
///
/// The same structure describes a query's root selection, any nested field, and the body of a
/// fragment declaration (see [`Field::fragment`]).
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) arguments: Arguments,
    pub(crate) subfields: Vec<Field>,
    pub(crate) fragments: Vec<String>,
}

impl Field {
    /// Create a leaf field without arguments, subfields or fragments.
    ///
    /// Fails with [`ErrorType::InvalidName`] if `name` is empty.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::new("Field name is required", ErrorType::InvalidName));
        }
        Ok(Field {
            name,
            arguments: Arguments::new(),
            subfields: Vec::new(),
            fragments: Vec::new(),
        })
    }

    /// Create the body of a fragment declaration, named `fragment <name> on <type_condition>`.
    ///
    /// Subfields added to the returned field make up the fragment's selection set. Declarations
    /// are looked up by fragment name through a [`FragmentRegistry`](crate::fragments::FragmentRegistry).
    ///
    /// Fails with [`ErrorType::InvalidFragmentName`] if `name` couldn't be spread by
    /// [`Field::add_fragments`], i.e. isn't a valid GraphQL name.
    pub fn fragment(name: &str, type_condition: &str) -> Result<Self> {
        if name.is_empty() || type_condition.is_empty() {
            return Err(Error::new(
                "Fragment name and type condition are required",
                ErrorType::InvalidName,
            ));
        }
        if !is_name(name) {
            return Err(Error::new_with_context(
                "Invalid fragment name",
                name,
                ErrorType::InvalidFragmentName,
            ));
        }
        Field::new(format!("fragment {} on {}", name, type_condition))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    #[inline]
    pub fn subfields(&self) -> &[Field] {
        &self.subfields
    }

    /// Names of the fragments spread into this field, in spread order.
    #[inline]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Find a direct subfield by its name.
    pub fn subfield(&self, name: &str) -> Option<&Field> {
        self.subfields.iter().find(|field| field.name == name)
    }

    /// Whether this field has neither subfields nor fragment spreads and hence prints no
    /// selection set.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.subfields.is_empty() && self.fragments.is_empty()
    }
}
