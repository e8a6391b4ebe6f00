//! ## Crate layout
//! - `core`: policy classification, the relation scan, grouped results, and
//!   the paginated preview surface.
//!
//! The `prelude` module mirrors the surface used by host-framework glue
//! code: implement [`DeleteTarget`](uproot_core::traits::DeleteTarget) over
//! the framework's relationship metadata, then call [`preview`].

pub use uproot_core as core;

use uproot_core::{collector::DeletePreview, error::InternalError, traits::DeleteTarget};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the relation scan for `target` and materialize the preview.
///
/// Callers must check [`DeletePreview::deletable`] before performing the
/// actual deletion; executing the delete is out of scope here.
pub fn preview<T: DeleteTarget>(target: &T) -> Result<DeletePreview, InternalError> {
    DeletePreview::collect(target)
}

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::preview;
    pub use uproot_core::{
        PAGE_SIZE,
        collector::{BlockReason, CollectOutcome, DeletePreview, EntityGroup, RelatedGroups},
        model::{RelationArity, RelationModel, TargetModel},
        page::{Page, Paged},
        policy::DeletePolicy,
        traits::DeleteTarget,
        types::RecordRef,
    };
    pub use serde::{Deserialize, Serialize};
    pub use ulid::Ulid;
}
