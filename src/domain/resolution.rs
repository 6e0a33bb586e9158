// src/domain/resolution.rs
use super::mock;
use super::nearest::{find_nearest, MAX_MATCH_DISTANCE_METERS};
use super::property::Property;
use super::repository::ZoneStore;
use super::zone::Zone;
use crate::errors::ServerError;
use crate::geos::GeoPoint;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// How the returned property was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Nearest stored property within the match distance.
    Database,
    /// Some stored property of the zone; none was close enough.
    DatabaseFallback,
    /// The zone has no stored properties; the record was synthesized.
    Simulated,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Database => "database",
            Source::DatabaseFallback => "database-fallback",
            Source::Simulated => "simulated",
        }
    }
}

/// Outcome of a successful resolution. Never persisted.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub source: Source,
    pub property: Property,
    pub zone: Zone,
    pub resolved_at: DateTime<Utc>,
}

/// Resolves what applies at `point`, trying in order:
///
/// 1. the zone containing the point; none is [`ServerError::OutsideCoverage`]
/// 2. the zone's nearest property within [`MAX_MATCH_DISTANCE_METERS`]
/// 3. the zone's first property, at any distance
/// 4. a simulated property for the zone
///
/// Each step runs at most once. Store errors propagate unchanged.
pub fn resolve_property<S, R>(
    store: &S,
    point: GeoPoint,
    rng: &mut R,
) -> Result<Resolution, ServerError>
where
    S: ZoneStore + ?Sized,
    R: Rng,
{
    let zone = match store.find_zone_containing(point)? {
        Some(zone) => zone,
        None => {
            info!(lat = point.lat, lng = point.lng, "point outside covered zones");
            return Err(ServerError::OutsideCoverage);
        }
    };

    let properties = store.properties_in_zone(zone.id)?;

    let nearest = find_nearest(point, &zone, &properties, MAX_MATCH_DISTANCE_METERS)
        .map(|m| (m.property.clone(), m.distance_meters));

    let (source, property) = match nearest {
        Some((property, distance_m)) => {
            debug!(zone = %zone.slug, distance_m, "nearest match");
            (Source::Database, property)
        }
        None => match properties.into_iter().next() {
            Some(first) => {
                debug!(zone = %zone.slug, "no property within bound, using zone fallback");
                (Source::DatabaseFallback, first)
            }
            None => {
                debug!(zone = %zone.slug, "zone has no properties, simulating");
                (Source::Simulated, mock::synthesize(point, &zone, rng))
            }
        },
    };

    Ok(Resolution {
        source,
        property,
        zone,
        resolved_at: Utc::now(),
    })
}
