// responses/insight.rs
use crate::domain::{Resolution, Source, Zone};
use crate::geos::GeoPoint;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of a successful `/property` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInsight<'a> {
    pub source: Source,
    pub name: &'a str,
    pub address: &'a str,
    pub property_type: &'a str,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub size_sqm: i64,
    #[serde(rename = "valuationGBP")]
    pub valuation_gbp: i64,
    pub rent_per_month: i64,
    pub rental_yield: f64,
    pub description: Option<&'a str>,
    pub coordinates: GeoPoint,
    pub zone: &'a Zone,
    pub last_updated: DateTime<Utc>,
    pub resolved_at: DateTime<Utc>,
}

impl<'a> From<&'a Resolution> for PropertyInsight<'a> {
    fn from(r: &'a Resolution) -> Self {
        let p = &r.property;
        PropertyInsight {
            source: r.source,
            name: &p.name,
            address: &p.address,
            property_type: &p.property_type,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            size_sqm: p.size_sqm,
            valuation_gbp: p.valuation_gbp,
            rent_per_month: p.rent_per_month,
            rental_yield: p.rental_yield,
            description: p.description.as_deref(),
            coordinates: p.location,
            zone: &r.zone,
            last_updated: p.updated_at,
            resolved_at: r.resolved_at,
        }
    }
}
