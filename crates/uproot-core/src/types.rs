use serde::Serialize;
use std::fmt;
use ulid::Ulid;

///
/// RecordRef
///
/// Opaque handle to one persisted record surfaced by a preview: the
/// referencing entity name and its key.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RecordRef {
    pub entity: &'static str,
    pub key: Ulid,
}

impl RecordRef {
    #[must_use]
    pub const fn new(entity: &'static str, key: Ulid) -> Self {
        Self { entity, key }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity, self.key)
    }
}
