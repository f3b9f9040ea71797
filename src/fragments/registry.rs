use crate::builder::Field;
use hashbrown::HashMap;

/// Map of fragment names to their declarations.
///
/// A registry is set up once by the caller, e.g. when creating a
/// [`Client`](crate::client::Client), and is only ever read while resolving fragments. Each
/// declaration is a [`Field`] created by [`Field::fragment`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentRegistry {
    fragments: HashMap<String, Field>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a fragment under `name`, returning the declaration it replaces, if any.
    pub fn insert<S: Into<String>>(&mut self, name: S, declaration: Field) -> Option<Field> {
        self.fragments.insert(name.into(), declaration)
    }

    /// Builder-style variant of [`FragmentRegistry::insert`].
    pub fn with<S: Into<String>>(mut self, name: S, declaration: Field) -> Self {
        self.insert(name, declaration);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fragments.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &HashMap<String, Field> {
        &self.fragments
    }
}

impl<S: Into<String>> FromIterator<(S, Field)> for FragmentRegistry {
    fn from_iter<I: IntoIterator<Item = (S, Field)>>(iter: I) -> Self {
        FragmentRegistry {
            fragments: iter
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration))
                .collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, Field)> for FragmentRegistry {
    fn extend<I: IntoIterator<Item = (S, Field)>>(&mut self, iter: I) {
        for (name, declaration) in iter {
            self.insert(name, declaration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let declaration = Field::fragment("Frag", "Type").unwrap();
        let mut registry = FragmentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.insert("Frag", declaration.clone()), None);
        assert!(registry.contains("Frag"));
        assert_eq!(registry.get("Frag"), Some(&declaration));
        assert_eq!(registry.get("Other"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn collect() {
        let registry: FragmentRegistry = [
            ("A", Field::fragment("A", "Type").unwrap()),
            ("B", Field::fragment("B", "Type").unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.len(), 2);

        let registry = registry.with("A", Field::fragment("A", "Other").unwrap());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("A").unwrap().name(), "fragment A on Other");
    }
}
