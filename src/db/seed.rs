// src/db/seed.rs
use super::connection::Database;
use super::{properties, zones};
use crate::domain::zone::DEFAULT_ZONE_COLOR;
use crate::domain::{NewProperty, NewZone, ZoneSummary};
use crate::errors::ServerError;
use crate::geos::{GeoPoint, ZoneGeometry};
use chrono::Utc;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub zone_id: i64,
    pub zone_name: String,
    pub removed: usize,
    pub inserted: usize,
}

/// Replaces one zone and all of its properties in a single transaction:
/// the zone is upserted by slug, its old properties deleted, the new ones
/// inserted. Geometry is validated before anything is written.
pub fn seed_zone(
    db: &Database,
    zone: &NewZone,
    seed_properties: &[NewProperty],
) -> Result<SeedReport, ServerError> {
    zone.geometry
        .validate()
        .map_err(|e| ServerError::BadRequest(format!("zone {}: {e}", zone.slug)))?;

    for prop in seed_properties {
        GeoPoint::new(prop.location.lat, prop.location.lng).map_err(|_| {
            ServerError::BadRequest(format!("property {} has invalid coordinates", prop.name))
        })?;
    }

    let now = Utc::now();

    let report = db.with_conn(|conn| {
        let tx = conn.transaction()?;

        let zone_id = zones::upsert_zone(&tx, zone, now)?;
        let removed = properties::delete_properties_in_zone(&tx, zone_id)?;
        for prop in seed_properties {
            properties::insert_property(&tx, zone_id, prop, now)?;
        }

        tx.commit()?;

        Ok(SeedReport {
            zone_id,
            zone_name: zone.name.clone(),
            removed,
            inserted: seed_properties.len(),
        })
    })?;

    info!(
        zone = %report.zone_name,
        zone_id = report.zone_id,
        removed = report.removed,
        inserted = report.inserted,
        "seeded zone"
    );
    Ok(report)
}

/// Seeds the Westminster & Soho showcase zone.
pub fn seed_showcase(db: &Database) -> Result<SeedReport, ServerError> {
    seed_zone(db, &westminster_showcase(), &showcase_properties())
}

pub fn westminster_showcase() -> NewZone {
    NewZone {
        name: "Westminster & Soho Showcase Zone".into(),
        slug: "central-london-westminster".into(),
        description: Some(
            "Focus area covering Westminster, Soho, Mayfair, and Covent Garden, some of the \
             most property-dense neighbourhoods in London."
                .into(),
        ),
        color: DEFAULT_ZONE_COLOR.into(),
        summary: ZoneSummary {
            avg_valuation: Some(1_850_000),
            median_rent: Some(4_200),
            annual_transactions: Some(1_845),
            primary_property_type: Some("Prime apartments & period townhouses".into()),
        },
        geometry: ZoneGeometry::Polygon(vec![vec![
            [-0.1606, 51.5151],
            [-0.1768, 51.5081],
            [-0.1785, 51.5039],
            [-0.1668, 51.4978],
            [-0.1531, 51.4933],
            [-0.1297, 51.4898],
            [-0.1066, 51.4989],
            [-0.0974, 51.5054],
            [-0.0948, 51.5123],
            [-0.1032, 51.5182],
            [-0.1231, 51.5212],
            [-0.1444, 51.5219],
            [-0.1606, 51.5151],
        ]]),
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    name: &str,
    address: &str,
    property_type: &str,
    bedrooms: i64,
    bathrooms: i64,
    size_sqm: i64,
    valuation_gbp: i64,
    rent_per_month: i64,
    description: &str,
    lng_lat: [f64; 2],
) -> NewProperty {
    NewProperty {
        name: name.into(),
        address: address.into(),
        property_type: property_type.into(),
        bedrooms,
        bathrooms,
        size_sqm,
        valuation_gbp,
        rent_per_month,
        description: Some(description.into()),
        location: GeoPoint::from_lng_lat(lng_lat),
    }
}

pub fn showcase_properties() -> Vec<NewProperty> {
    vec![
        listing(
            "Mayfair Penthouse",
            "Brook Street, Mayfair W1K",
            "Apartment",
            3,
            3,
            185,
            3_250_000,
            12_500,
            "Top-floor lateral apartment with south-facing terraces overlooking Grosvenor Square.",
            [-0.1496, 51.5108],
        ),
        listing(
            "Soho Creative Loft",
            "Dean Street, Soho W1D",
            "Loft",
            2,
            2,
            128,
            1_425_000,
            5_900,
            "Converted warehouse loft with exposed brick and double-height ceilings designed for live/work.",
            [-0.1328, 51.5139],
        ),
        listing(
            "Marylebone Mews House",
            "Wimpole Mews, Marylebone W1G",
            "Mews House",
            4,
            3,
            205,
            2_480_000,
            8_150,
            "Quiet cobbled mews with private garage and rooftop terrace moments from Marylebone High Street.",
            [-0.1513, 51.5191],
        ),
        listing(
            "Covent Garden Pied-à-Terre",
            "Henrietta Street, Covent Garden WC2E",
            "Apartment",
            1,
            1,
            64,
            985_000,
            3_600,
            "Boutique apartment above the piazza with Juliet balcony and concierge services.",
            [-0.1236, 51.5115],
        ),
        listing(
            "Westminster River View Flat",
            "Millbank, Westminster SW1P",
            "Apartment",
            2,
            2,
            112,
            1_580_000,
            5_400,
            "Corner apartment with panoramic Thames views and access to residents' spa.",
            [-0.1285, 51.4939],
        ),
        listing(
            "St James's Period Residence",
            "Jermyn Street, St James's SW1Y",
            "Apartment",
            3,
            2,
            156,
            2_175_000,
            7_800,
            "Grade II listed apartment with original sash windows and bespoke joinery.",
            [-0.1379, 51.5083],
        ),
        listing(
            "Fitzrovia Design Studio",
            "Charlotte Street, Fitzrovia W1T",
            "Studio",
            1,
            1,
            74,
            865_000,
            3_150,
            "Dual-aspect design studio with polished concrete floors and flexible partition system.",
            [-0.1351, 51.5186],
        ),
        listing(
            "West End Duplex",
            "Wardour Street, West End W1F",
            "Duplex",
            2,
            2,
            134,
            1_680_000,
            6_100,
            "Duplex with gallery-level living space, tailored for entertainment and media professionals.",
            [-0.1367, 51.5124],
        ),
        listing(
            "Hyde Park Corner Townhouse",
            "Wilton Place, Belgravia SW1X",
            "Townhouse",
            5,
            4,
            312,
            4_950_000,
            16_800,
            "Stucco-fronted townhouse with private garden square access and lower ground cinema.",
            [-0.1508, 51.5035],
        ),
        listing(
            "Leicester Square Boutique Flat",
            "Cranbourn Street, Leicester Square WC2H",
            "Apartment",
            2,
            2,
            98,
            1_325_000,
            5_100,
            "Boutique residence with acoustic glazing ideal for pied-à-terre buyers seeking central access.",
            [-0.1290, 51.5101],
        ),
        listing(
            "Piccadilly Investment Suite",
            "Piccadilly, St James's W1J",
            "Apartment",
            1,
            1,
            58,
            775_000,
            2_850,
            "High-floor one-bed with skyline vistas, currently configured as a turnkey rental suite.",
            [-0.1406, 51.5088],
        ),
        listing(
            "Regent Street Corner Flat",
            "Regent Street, Soho W1B",
            "Apartment",
            2,
            2,
            121,
            1_710_000,
            6_400,
            "Corner aspect flat with Art Deco features and direct lift access to private lobby.",
            [-0.1409, 51.5141],
        ),
        listing(
            "Golden Square Heritage Loft",
            "Golden Square, Soho W1F",
            "Loft",
            2,
            2,
            146,
            1_550_000,
            5_800,
            "Top-floor loft within a converted publishing house, featuring exposed beams and skyline deck.",
            [-0.1371, 51.5114],
        ),
        listing(
            "Victoria Contemporary Apartment",
            "Cathedral Walk, Victoria SW1E",
            "Apartment",
            2,
            2,
            102,
            1_480_000,
            5_250,
            "South-west facing apartment in a new build with residents' lounge and rooftop gardens.",
            [-0.1394, 51.4989],
        ),
        listing(
            "Lancaster Gate Lateral Home",
            "Lancaster Gate, Bayswater W2",
            "Apartment",
            3,
            3,
            189,
            2_125_000,
            7_600,
            "Lateral apartment spanning two stucco-fronted buildings with Hyde Park views.",
            [-0.1771, 51.5118],
        ),
    ]
}
