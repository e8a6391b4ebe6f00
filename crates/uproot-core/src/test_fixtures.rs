use crate::{
    model::{RelationArity, RelationModel, TargetModel},
    traits::DeleteTarget,
    types::RecordRef,
};
use std::{cell::RefCell, collections::BTreeMap};
use ulid::Ulid;

///
/// TestTarget
///
/// Test-only `DeleteTarget` with configurable relation metadata and accessor
/// rows. Leaks relation storage to satisfy the static lifetime required by
/// `TargetModel`. Records every accessor fetch so tests can assert
/// early-exit behavior.
///

pub(crate) struct TestTarget {
    model: TargetModel,
    key: Option<Ulid>,
    rows: BTreeMap<&'static str, Vec<RecordRef>>,
    fetched: RefCell<Vec<String>>,
}

impl TestTarget {
    pub(crate) fn new(entity_name: &'static str, relations: Vec<RelationModel>) -> Self {
        // Leak the relations to satisfy the static lifetime required by TargetModel.
        let relations: &'static [RelationModel] = Box::leak(relations.into_boxed_slice());

        Self {
            model: TargetModel {
                entity_name,
                relations,
            },
            key: Some(Ulid::from(1)),
            rows: BTreeMap::new(),
            fetched: RefCell::new(Vec::new()),
        }
    }

    /// Mark the value unsaved.
    pub(crate) fn unsaved(mut self) -> Self {
        self.key = None;
        self
    }

    /// Attach rows behind `accessor`; accessors never attached read as absent.
    pub(crate) fn with_rows(mut self, accessor: &'static str, rows: Vec<RecordRef>) -> Self {
        self.rows.insert(accessor, rows);
        self
    }

    /// Accessors fetched so far, in fetch order.
    pub(crate) fn fetch_log(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl DeleteTarget for TestTarget {
    fn model(&self) -> &TargetModel {
        &self.model
    }

    fn key(&self) -> Option<Ulid> {
        self.key
    }

    fn related(&self, accessor: &str) -> Option<Vec<RecordRef>> {
        self.fetched.borrow_mut().push(accessor.to_string());
        self.rows.get(accessor).cloned()
    }
}

/// Build `count` record handles for `entity` with keys starting at `start`.
pub(crate) fn record_refs(entity: &'static str, start: u128, count: usize) -> Vec<RecordRef> {
    (0..count)
        .map(|i| RecordRef::new(entity, Ulid::from(start + i as u128)))
        .collect()
}

/// Shorthand for a to-many reverse relationship.
pub(crate) const fn to_many(
    source_entity: &'static str,
    accessor: &'static str,
    on_delete: &'static str,
) -> RelationModel {
    RelationModel::new(source_entity, accessor, on_delete, RelationArity::ToMany)
}
