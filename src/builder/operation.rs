use super::field::Field;

/// The type of an [Operation].
///
/// [Reference](https://spec.graphql.org/October2021/#OperationType)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// The keyword this operation type is printed with.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// An anonymous operation selecting a single root field, printed as `query{<field>}`.
///
/// The root field is typically a service's entry point, e.g. `viewer` or `repository(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    field: Field,
}

impl Operation {
    pub fn new(kind: OperationKind, field: Field) -> Self {
        Operation { kind, field }
    }

    /// Wrap `field` in a query operation.
    pub fn query(field: Field) -> Self {
        Operation::new(OperationKind::Query, field)
    }

    /// Wrap `field` in a mutation operation.
    pub fn mutation(field: Field) -> Self {
        Operation::new(OperationKind::Mutation, field)
    }

    #[inline]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Apply a builder operation to the root field, e.g. to select more subfields.
    ///
    /// ```
    /// use graphql_compose::builder::*;
    ///
    /// # fn main() -> graphql_compose::error::Result<()> {
    /// let query = Operation::query(Field::new("viewer")?)
    ///     .map_field(|viewer| viewer.add_subfields("login"))?;
    /// assert_eq!(query.print(), "query{viewer{login}}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn map_field<F, E>(&self, f: F) -> Result<Operation, E>
    where
        F: FnOnce(&Field) -> Result<Field, E>,
    {
        Ok(Operation {
            kind: self.kind,
            field: f(&self.field)?,
        })
    }
}

impl From<Field> for Operation {
    /// Fields are wrapped in a query by default.
    #[inline]
    fn from(field: Field) -> Self {
        Operation::query(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_field_keeps_kind() {
        let mutation = Operation::mutation(Field::new("addStar").unwrap());
        let mapped = mutation
            .map_field(|field| field.add_subfields("clientMutationId"))
            .unwrap();
        assert_eq!(mapped.kind(), OperationKind::Mutation);
        assert_eq!(mapped.field().subfields().len(), 1);
        assert!(mutation.field().subfields().is_empty());
    }

    #[test]
    fn from_field() {
        let operation: Operation = Field::new("viewer").unwrap().into();
        assert_eq!(operation.kind(), OperationKind::Query);
    }
}
