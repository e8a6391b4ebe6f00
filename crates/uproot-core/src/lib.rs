//! Core runtime for uproot: the delete-target boundary trait, policy
//! classification, the relation scan, grouped results, and the paginated
//! preview surface exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod collector;
pub mod error;
pub mod model;
pub mod obs;
pub mod page;
pub mod policy;
pub mod traits;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Number of per-entity groups shown on a single preview page.
pub const PAGE_SIZE: u32 = 10;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or sinks are re-exported here.
///

pub mod prelude {
    pub use crate::{
        PAGE_SIZE,
        collector::{CollectOutcome, DeletePreview, RelatedGroups},
        model::{RelationArity, RelationModel, TargetModel},
        policy::DeletePolicy,
        traits::DeleteTarget,
        types::RecordRef,
    };
}
