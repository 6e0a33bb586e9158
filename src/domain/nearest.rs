// src/domain/nearest.rs
use super::property::Property;
use super::zone::Zone;
use crate::geos::{haversine_meters, GeoPoint};

/// How far a stored property may be from the query point and still count
/// as a match for it.
pub const MAX_MATCH_DISTANCE_METERS: f64 = 800.0;

#[derive(Debug, Clone, Copy)]
pub struct NearestMatch<'a> {
    pub property: &'a Property,
    pub distance_meters: f64,
}

/// Closest property of `zone` to `point`, if it lies within `max_distance_meters`.
///
/// Linear scan over the zone's properties; ties keep the first one seen.
/// Properties belonging to other zones are ignored.
pub fn find_nearest<'a>(
    point: GeoPoint,
    zone: &Zone,
    properties: &'a [Property],
    max_distance_meters: f64,
) -> Option<NearestMatch<'a>> {
    let mut best: Option<NearestMatch<'a>> = None;

    for property in properties.iter().filter(|p| p.zone_id == zone.id) {
        let distance_meters = haversine_meters(point, property.location);
        let closer = best.map_or(true, |b| distance_meters < b.distance_meters);
        if closer {
            best = Some(NearestMatch {
                property,
                distance_meters,
            });
        }
    }

    best.filter(|m| m.distance_meters <= max_distance_meters)
}
