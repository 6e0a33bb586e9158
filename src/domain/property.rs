// src/domain/property.rs
use super::finance;
use crate::geos::GeoPoint;
use chrono::{DateTime, Utc};

/// A point-located property record.
///
/// Stored records always carry an `id`; a simulated property built for a
/// single response has none.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: Option<i64>,
    pub zone_id: i64,
    pub name: String,
    pub address: String,
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub size_sqm: i64,
    pub valuation_gbp: i64,
    pub rent_per_month: i64,
    /// Percentage, one decimal. Fixed when the record is created.
    pub rental_yield: f64,
    pub description: Option<String>,
    pub location: GeoPoint,
    pub updated_at: DateTime<Utc>,
}

/// Seed input for a property. The yield is derived, never supplied.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub size_sqm: i64,
    pub valuation_gbp: i64,
    pub rent_per_month: i64,
    pub description: Option<String>,
    pub location: GeoPoint,
}

impl NewProperty {
    pub fn rental_yield(&self) -> f64 {
        finance::rental_yield(self.valuation_gbp, self.rent_per_month)
    }
}
