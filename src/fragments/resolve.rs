use super::FragmentRegistry;
use crate::builder::{Field, Operation, PrintNode};
use crate::error::{Error, Result};

/// Trait for anything that can be sent as a request document.
///
/// It exposes the root field whose fragment spreads are resolved against a
/// [`FragmentRegistry`] before the document is printed.
pub trait Executable: PrintNode {
    /// The field whose selection tree is scanned for fragment spreads.
    fn root(&self) -> &Field;
}

impl Executable for Field {
    #[inline]
    fn root(&self) -> &Field {
        self
    }
}

impl Executable for Operation {
    #[inline]
    fn root(&self) -> &Field {
        self.field()
    }
}

/// Collect the names of all fragments spread anywhere in a field's selection tree.
///
/// A field's own spreads come first, followed by those of each subfield in order. Every name is
/// listed once, at its first occurrence.
pub fn fragment_names(field: &Field) -> Vec<&str> {
    let mut names: Vec<&str> = field.fragments().iter().map(String::as_str).collect();
    for subfield in field.subfields() {
        for name in fragment_names(subfield) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Compute the fragment declarations that must be appended to `root` to make it self-contained.
///
/// Each name spread in `root` is looked up in `registry`, and its declaration is followed by the
/// declarations its own body requires, in the order they're discovered. All names spread at one
/// level are looked up before any declaration body is scanned.
///
/// Declarations aren't deduplicated across branches, so a fragment spread by two separate
/// fragments is listed twice. Fragments must not spread themselves, directly or through other
/// fragments, as resolving them never terminates.
///
/// Fails with [`ErrorType::UndeclaredFragment`](crate::error::ErrorType::UndeclaredFragment)
/// for the first spread name that has no declaration.
pub fn resolve_fragments<'a>(root: &Field, registry: &'a FragmentRegistry) -> Result<Vec<&'a Field>> {
    let declarations = fragment_names(root)
        .into_iter()
        .map(|name| registry.get(name).ok_or_else(|| Error::undeclared_fragment(name)))
        .collect::<Result<Vec<_>>>()?;

    let mut resolved = Vec::new();
    for declaration in declarations {
        resolved.push(declaration);
        resolved.extend(resolve_fragments(declaration, registry)?);
    }
    Ok(resolved)
}

/// Print a request document: the executable followed by every fragment declaration it requires.
///
/// ```
/// use graphql_compose::{builder::*, fragments::*};
///
/// # fn main() -> graphql_compose::error::Result<()> {
/// let registry = FragmentRegistry::new()
///     .with("UserInfo", Field::fragment("UserInfo", "User")?.add_subfields("login")?);
/// let query = Operation::query(Field::new("viewer")?.add_fragments(["UserInfo"])?);
///
/// assert_eq!(
///     print_document(&query, &registry)?,
///     "query{viewer{...UserInfo}}fragment UserInfo on User{login}"
/// );
/// # Ok(())
/// # }
/// ```
pub fn print_document<E: Executable + ?Sized>(
    executable: &E,
    registry: &FragmentRegistry,
) -> Result<String> {
    let fragments = resolve_fragments(executable.root(), registry)?;
    let mut document = executable.print();
    for fragment in fragments {
        document.push_str(&fragment.print());
    }
    Ok(document)
}
