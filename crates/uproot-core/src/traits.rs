use crate::{model::TargetModel, types::RecordRef};
use ulid::Ulid;

///
/// DeleteTarget
///
/// Boundary contract for the host framework's metadata/query layer.
///
/// ## Semantics
/// - `model()` supplies the entity name and the ordered reverse
///   relationships; the scan follows that order and does not sort it
/// - `key()` is the persisted identity; `None` marks an unsaved value,
///   which the collector rejects before scanning
/// - `related(accessor)` fetches the referencing records behind one
///   accessor, or `None` when the accessor is not present on the instance
///
/// Fetches are synchronous; implementations own any I/O.
///

pub trait DeleteTarget {
    fn model(&self) -> &TargetModel;

    fn key(&self) -> Option<Ulid>;

    fn related(&self, accessor: &str) -> Option<Vec<RecordRef>>;
}
