mod groups;
mod outcome;


pub use groups::{EntityGroup, RelatedGroups};
pub use outcome::{BlockReason, CollectOutcome};

use crate::{
    error::{InternalError, TargetError},
    obs::sink::{self, MetricsEvent},
    page::Paged,
    policy::DeletePolicy,
    traits::DeleteTarget,
};

///
/// CollectExecutor
///
/// Scan invariant:
/// Relationships are evaluated in model order, and a blocking relationship
/// ends the scan immediately. Relationships after it are never examined and
/// their accessors are never fetched.
///

pub(crate) struct CollectExecutor<'a, T: DeleteTarget> {
    target: &'a T,
    debug: bool,
}

impl<'a, T: DeleteTarget> CollectExecutor<'a, T> {
    #[must_use]
    pub(crate) const fn new(target: &'a T, debug: bool) -> Self {
        Self { target, debug }
    }

    fn debug_log(&self, s: impl Into<String>) {
        if self.debug {
            println!("[debug] {}", s.into());
        }
    }

    pub(crate) fn execute(self) -> Result<DeletePreview, InternalError> {
        let model = self.target.model();

        // Unsaved values have no reverse rows to preview; reject before scanning.
        if self.target.key().is_none() {
            return Err(TargetError::Unsaved {
                entity: model.entity_name,
            }
            .into());
        }

        sink::record(MetricsEvent::CollectStart {
            entity: model.entity_name,
        });
        self.debug_log(format!(
            "collect plan on {} ({} relations)",
            model.entity_name,
            model.relations.len()
        ));

        let outcome = self.scan();

        match &outcome {
            CollectOutcome::Blocked(reason) => {
                sink::record(MetricsEvent::BlockedDelete {
                    entity: model.entity_name,
                    policy: reason.policy(),
                });
                self.debug_log(format!("collect blocked -> {reason}"));
            }
            CollectOutcome::Collected(groups) => {
                sink::record(MetricsEvent::CollectFinish {
                    entity: model.entity_name,
                    groups: groups.len() as u64,
                    rows: groups.row_count(),
                });
                self.debug_log(format!(
                    "collect complete -> {} groups, {} rows",
                    groups.len(),
                    groups.row_count()
                ));
            }
        }

        Ok(DeletePreview::from_outcome(outcome))
    }

    // Pure relation scan; blocking is an explicit early return.
    fn scan(&self) -> CollectOutcome {
        let model = self.target.model();
        let target_entity = model.entity_name;
        let mut groups = RelatedGroups::default();

        for relation in model.relations {
            let policy = DeletePolicy::classify(relation.on_delete);

            // Protective links block regardless of whether dependents exist,
            // before any fetch.
            if policy == DeletePolicy::Protect {
                return CollectOutcome::Blocked(BlockReason::Protected {
                    source: relation.source_entity,
                    target: target_entity,
                });
            }

            if !relation.arity.previews() || !policy.collects() {
                continue;
            }

            // Accessors absent from the instance are skipped silently.
            let Some(rows) = self.target.related(relation.accessor) else {
                continue;
            };
            sink::record(MetricsEvent::RowsFetched {
                entity: relation.source_entity,
                rows: rows.len() as u64,
            });

            if rows.is_empty() {
                continue;
            }

            // The store would reject the delete while these rows exist.
            if policy == DeletePolicy::DoNothing {
                return CollectOutcome::Blocked(BlockReason::DoNothingDependents {
                    source: relation.source_entity,
                    target: target_entity,
                });
            }

            groups.merge(relation.source_entity, policy, rows);
        }

        CollectOutcome::Collected(groups)
    }
}

///
/// DeletePreview
///
/// Materialized result of a relation scan: whether the record can be
/// deleted, why not, and the dependents gathered for display.
///

#[derive(Debug)]
pub struct DeletePreview {
    outcome: CollectOutcome,
}

impl DeletePreview {
    /// Run the relation scan for `target` and materialize the preview.
    pub fn collect<T: DeleteTarget>(target: &T) -> Result<Self, InternalError> {
        CollectExecutor::new(target, false).execute()
    }

    /// As [`Self::collect`], with `[debug]` scan logging enabled.
    pub fn collect_debug<T: DeleteTarget>(target: &T) -> Result<Self, InternalError> {
        CollectExecutor::new(target, true).execute()
    }

    pub(crate) const fn from_outcome(outcome: CollectOutcome) -> Self {
        Self { outcome }
    }

    #[must_use]
    pub const fn outcome(&self) -> &CollectOutcome {
        &self.outcome
    }

    /// False when the scan hit a protective or no-action relationship.
    /// Callers must check this before attempting the actual deletion.
    #[must_use]
    pub const fn deletable(&self) -> bool {
        matches!(self.outcome, CollectOutcome::Collected(_))
    }

    /// Operator-facing reason when the delete is blocked.
    #[must_use]
    pub fn blocking_reason(&self) -> Option<String> {
        match &self.outcome {
            CollectOutcome::Blocked(reason) => Some(reason.to_string()),
            CollectOutcome::Collected(_) => None,
        }
    }

    /// True unless a completed scan found dependents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.outcome {
            CollectOutcome::Blocked(_) => true,
            CollectOutcome::Collected(groups) => groups.is_empty(),
        }
    }

    /// Groups gathered by a completed scan; empty when blocked.
    #[must_use]
    pub fn groups(&self) -> &RelatedGroups {
        match &self.outcome {
            CollectOutcome::Blocked(_) => RelatedGroups::empty_ref(),
            CollectOutcome::Collected(groups) => groups,
        }
    }

    /// Paginated view over the grouped entries, one page item per entity.
    #[must_use]
    pub fn pager(&self) -> Paged<'_> {
        Paged::new(self.groups().entries())
    }
}
