//! Runtime relationship metadata.
//!
//! Types in `model` are the *runtime representations* of what the host
//! framework knows about a record type: who points at it, through which
//! accessor, and with which on-delete rule. They are supplied by glue code
//! at the framework boundary and consumed directly by the relation scan.

pub mod relation;
pub mod target;

pub use relation::{RelationArity, RelationModel};
pub use target::TargetModel;
