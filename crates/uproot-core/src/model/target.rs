use crate::model::relation::RelationModel;

///
/// TargetModel
///
/// Static description of a record type whose deletion can be previewed:
/// its entity name and the reverse relationships pointing at it.
///
/// Relation order is authoritative: the scan walks `relations` front to
/// back, and blocking outcomes depend on which relationship is hit first.
///

#[derive(Clone, Copy, Debug)]
pub struct TargetModel {
    /// Stable entity name, used in reasons and diagnostics.
    pub entity_name: &'static str,
    /// Ordered reverse-relationship list.
    pub relations: &'static [RelationModel],
}
