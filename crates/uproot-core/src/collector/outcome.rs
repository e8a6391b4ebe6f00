use crate::{collector::RelatedGroups, policy::DeletePolicy};
use std::fmt;

///
/// CollectOutcome
///
/// Terminal result of a relation scan. Blocking is a normal outcome, not an
/// error. A blocked scan carries no groups: dependents gathered before the
/// blocking relationship are discarded with it, and relationships after it
/// were never examined.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollectOutcome {
    Collected(RelatedGroups),
    Blocked(BlockReason),
}

///
/// BlockReason
///
/// Why a delete is disallowed. Display renders the operator-facing message.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockReason {
    Protected {
        source: &'static str,
        target: &'static str,
    },

    DoNothingDependents {
        source: &'static str,
        target: &'static str,
    },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protected { source, target } => write!(
                f,
                "the related entity {source} has a relationship with {target} set to PROTECT, \
                 which prevents deleting this {target} record"
            ),
            Self::DoNothingDependents { source, target } => write!(
                f,
                "the {target} record has existing related {source} records and the relationship \
                 is set to DO_NOTHING; the underlying store will reject the deletion while they remain"
            ),
        }
    }
}

impl std::error::Error for BlockReason {}

impl BlockReason {
    /// Policy that produced the block.
    #[must_use]
    pub const fn policy(&self) -> DeletePolicy {
        match self {
            Self::Protected { .. } => DeletePolicy::Protect,
            Self::DoNothingDependents { .. } => DeletePolicy::DoNothing,
        }
    }

    /// Referencing entity that blocked the delete.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Protected { source, .. } | Self::DoNothingDependents { source, .. } => source,
        }
    }

    /// Entity the delete was aimed at.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        match self {
            Self::Protected { target, .. } | Self::DoNothingDependents { target, .. } => target,
        }
    }
}
