// src/domain/containment.rs
use super::zone::Zone;
use crate::geos::GeoPoint;

/// Finds the zone whose outline contains `point` (boundary included).
///
/// Zones are expected not to overlap. If they do, the first match in the
/// order given wins; stores hand zones over in ascending id order.
pub fn resolve_zone(point: GeoPoint, zones: &[Zone]) -> Option<&Zone> {
    zones.iter().find(|zone| zone.contains(point))
}
