// src/domain/mock.rs
use super::finance;
use super::property::Property;
use super::zone::Zone;
use crate::geos::GeoPoint;
use chrono::Utc;
use rand::Rng;

pub const SIMULATED_NAME: &str = "Simulated Property Insight";
pub const SIMULATED_PROPERTY_TYPE: &str = "Unknown";

/// Builds a plausible, internally consistent property for a zone that has no
/// stored records. Size, valuation and yield are drawn from `rng`; rent is
/// derived from valuation and yield, and room counts from size.
///
/// Callers pass a generator owned by the request so concurrent requests never
/// share random state.
pub fn synthesize<R: Rng>(point: GeoPoint, zone: &Zone, rng: &mut R) -> Property {
    let size_sqm = rng.gen_range(35.0..=250.0_f64).round() as i64;
    let valuation_gbp = rng.gen_range(250_000.0..=2_500_000.0_f64).round() as i64;
    let rental_yield = finance::round_to_tenth(rng.gen_range(2.5..=6.5_f64));
    let rent_per_month = finance::monthly_rent(valuation_gbp, rental_yield);

    Property {
        id: None,
        zone_id: zone.id,
        name: SIMULATED_NAME.to_string(),
        address: format!("{} (simulated)", zone.name),
        property_type: SIMULATED_PROPERTY_TYPE.to_string(),
        bedrooms: rooms_for_size(size_sqm, 45.0),
        bathrooms: rooms_for_size(size_sqm, 65.0),
        size_sqm,
        valuation_gbp,
        rent_per_month,
        rental_yield,
        description: None,
        location: point,
        updated_at: Utc::now(),
    }
}

// Coarse heuristic: one room per `sqm_per_room`, never fewer than one.
fn rooms_for_size(size_sqm: i64, sqm_per_room: f64) -> i64 {
    ((size_sqm as f64 / sqm_per_room).round() as i64).max(1)
}
