use crate::{policy::DeletePolicy, types::RecordRef};
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// EntityGroup
///
/// Dependents of one referencing entity, grouped by on-delete policy.
/// Invariant: a policy key is present only when at least one record was
/// fetched for it.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntityGroup {
    /// Referencing entity name.
    pub entity: &'static str,
    /// Policy-to-records grouping for that entity.
    pub by_policy: BTreeMap<DeletePolicy, Vec<RecordRef>>,
}

impl EntityGroup {
    #[must_use]
    pub fn row_count(&self) -> u64 {
        self.by_policy.values().map(|rows| rows.len() as u64).sum()
    }
}

///
/// RelatedGroups
///
/// Per-entity groups accumulated by a completed scan, in first-seen scan
/// order (which follows the target's relation metadata order).
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RelatedGroups {
    #[deref]
    #[into_iterator(owned, ref)]
    entries: Vec<EntityGroup>,
}

impl RelatedGroups {
    pub(crate) fn empty_ref() -> &'static Self {
        static EMPTY: RelatedGroups = RelatedGroups {
            entries: Vec::new(),
        };
        &EMPTY
    }

    #[must_use]
    pub fn entries(&self) -> &[EntityGroup] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&EntityGroup> {
        self.entries.iter().find(|group| group.entity == entity)
    }

    /// Records gathered for one entity/policy pair, if any were found.
    #[must_use]
    pub fn records(&self, entity: &str, policy: DeletePolicy) -> Option<&[RecordRef]> {
        self.get(entity)?.by_policy.get(&policy).map(Vec::as_slice)
    }

    /// Total records across all groups.
    #[must_use]
    pub fn row_count(&self) -> u64 {
        self.entries.iter().map(EntityGroup::row_count).sum()
    }

    // Append `rows` under [entity][policy], extending any existing list.
    pub(crate) fn merge(
        &mut self,
        entity: &'static str,
        policy: DeletePolicy,
        rows: Vec<RecordRef>,
    ) {
        debug_assert!(!rows.is_empty(), "empty fetches are filtered before merging");

        if let Some(group) = self.entries.iter_mut().find(|group| group.entity == entity) {
            group.by_policy.entry(policy).or_default().extend(rows);
        } else {
            let mut by_policy = BTreeMap::new();
            by_policy.insert(policy, rows);
            self.entries.push(EntityGroup { entity, by_policy });
        }
    }
}
