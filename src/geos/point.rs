// src/geos/point.rs
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

pub const INVALID_COORDINATES: &str = "Please provide valid lat and lng query parameters.";

/// A WGS84 location. Serialized as `{ "lat": .., "lng": .. }` for the map client;
/// stored and exchanged with geometry code in `[lng, lat]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Validates that both coordinates are finite and on the globe.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ServerError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);

        if !valid {
            return Err(ServerError::BadRequest(INVALID_COORDINATES.to_string()));
        }
        Ok(GeoPoint { lat, lng })
    }

    /// Parses raw query-string values, e.g. `lat=51.5108&lng=-0.1496`.
    pub fn parse(lat: Option<&str>, lng: Option<&str>) -> Result<Self, ServerError> {
        let parse = |raw: Option<&str>| {
            raw.map(str::trim)
                .filter(|s| !s.is_empty())
                .and_then(|s| s.parse::<f64>().ok())
                .ok_or_else(|| ServerError::BadRequest(INVALID_COORDINATES.to_string()))
        };
        GeoPoint::new(parse(lat)?, parse(lng)?)
    }

    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn to_geo(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}
