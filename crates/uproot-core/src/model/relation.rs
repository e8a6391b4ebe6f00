///
/// RelationModel
///
/// One reverse relationship pointing at the record under preview: which
/// entity references it, how to fetch the referencing records, and the
/// configured on-delete rule.
///

#[derive(Clone, Copy, Debug)]
pub struct RelationModel {
    /// Referencing entity name.
    pub source_entity: &'static str,
    /// Accessor used to fetch the referencing records from the instance.
    pub accessor: &'static str,
    /// Raw on-delete rule token as supplied by the host framework.
    pub on_delete: &'static str,
    /// Relationship arity.
    pub arity: RelationArity,
}

impl RelationModel {
    #[must_use]
    pub const fn new(
        source_entity: &'static str,
        accessor: &'static str,
        on_delete: &'static str,
        arity: RelationArity,
    ) -> Self {
        Self {
            source_entity,
            accessor,
            on_delete,
            arity,
        }
    }
}

///
/// RelationArity
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelationArity {
    ToOne,
    ToMany,
    ManyToMany,
}

impl RelationArity {
    /// Many-to-many links are resolved through a join surface and are not
    /// previewed here.
    #[must_use]
    pub const fn previews(self) -> bool {
        matches!(self, Self::ToOne | Self::ToMany)
    }
}
