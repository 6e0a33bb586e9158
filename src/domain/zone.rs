// src/domain/zone.rs
use crate::geos::{GeoPoint, ZoneGeometry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZONE_COLOR: &str = "#f97316";

/// Precomputed market figures for a zone. Every field is optional because
/// the seeding source may not have all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub avg_valuation: Option<i64>,
    pub median_rent: Option<i64>,
    pub annual_transactions: Option<i64>,
    pub primary_property_type: Option<String>,
}

/// A showcase zone as stored. Serializes to the shape `/zones` returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub summary: ZoneSummary,
    pub geometry: ZoneGeometry,
    pub updated_at: DateTime<Utc>,
}

impl Zone {
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.geometry.contains(point)
    }
}

/// Input for creating or replacing a zone, keyed by `slug`.
#[derive(Debug, Clone)]
pub struct NewZone {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub summary: ZoneSummary,
    pub geometry: ZoneGeometry,
}
