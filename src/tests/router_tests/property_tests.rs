use crate::db::{zones, Database};
use crate::domain::{NewZone, ZoneSummary};
use crate::geos::ZoneGeometry;
use crate::responses::errors::COVERAGE_MESSAGE;
use crate::tests::utils::{get_json, seeded_db};
use chrono::Utc;

#[test]
fn exact_match_comes_from_database() {
    let db = seeded_db("property_exact");

    let (status, body) = get_json(&db, "/property?lat=51.5108&lng=-0.1496");

    assert_eq!(status, 200);
    assert_eq!(body["source"], "database");
    assert_eq!(body["name"], "Mayfair Penthouse");
    assert_eq!(body["address"], "Brook Street, Mayfair W1K");
    assert_eq!(body["propertyType"], "Apartment");
    assert_eq!(body["bedrooms"], 3);
    assert_eq!(body["sizeSqm"], 185);
    assert_eq!(body["valuationGBP"], 3_250_000);
    assert_eq!(body["rentPerMonth"], 12_500);
    assert_eq!(body["rentalYield"], 4.6);
    assert_eq!(body["coordinates"]["lat"], 51.5108);
    assert_eq!(body["coordinates"]["lng"], -0.1496);
    assert_eq!(body["zone"]["slug"], "central-london-westminster");
    assert!(body["lastUpdated"].is_string());
}

#[test]
fn nearby_point_matches_closest_property() {
    let db = seeded_db("property_near");

    // ~15 m from West End Duplex, ~120 m from Golden Square Heritage Loft.
    let (status, body) = get_json(&db, "/property?lat=51.5125&lng=-0.1366");

    assert_eq!(status, 200);
    assert_eq!(body["source"], "database");
    assert_eq!(body["name"], "West End Duplex");
}

#[test]
fn far_point_in_zone_falls_back() {
    let db = seeded_db("property_fallback");

    // Inside the outline near its eastern edge, over 1.5 km from any property.
    let (status, body) = get_json(&db, "/property?lat=51.5100&lng=-0.1000");

    assert_eq!(status, 200);
    assert_eq!(body["source"], "database-fallback");
    assert_eq!(body["name"], "Mayfair Penthouse");
}

#[test]
fn empty_zone_is_simulated_and_consistent() {
    let db = seeded_db("property_simulated");
    let empty = NewZone {
        name: "Test Harbour".into(),
        slug: "test-harbour".into(),
        description: None,
        color: "#0ea5e9".into(),
        summary: ZoneSummary::default(),
        geometry: ZoneGeometry::Polygon(vec![vec![
            [10.0, 10.0],
            [11.0, 10.0],
            [11.0, 11.0],
            [10.0, 11.0],
            [10.0, 10.0],
        ]]),
    };
    db.with_conn(|conn| zones::upsert_zone(conn, &empty, Utc::now()))
        .unwrap();

    let (status, body) = get_json(&db, "/property?lat=10.5&lng=10.5");

    assert_eq!(status, 200);
    assert_eq!(body["source"], "simulated");
    assert_eq!(body["name"], "Simulated Property Insight");
    assert_eq!(body["address"], "Test Harbour (simulated)");
    assert_eq!(body["zone"]["slug"], "test-harbour");
    assert_eq!(body["coordinates"]["lat"], 10.5);
    assert!(body["description"].is_null());

    let valuation = body["valuationGBP"].as_i64().unwrap();
    let rental_yield = body["rentalYield"].as_f64().unwrap();
    let rent = body["rentPerMonth"].as_i64().unwrap();
    assert_eq!(
        rent,
        (valuation as f64 * rental_yield / 100.0 / 12.0).round() as i64
    );
}

#[test]
fn repeated_queries_return_same_property() {
    let db = seeded_db("property_idempotent");

    for uri in [
        "/property?lat=51.5108&lng=-0.1496",
        "/property?lat=51.5100&lng=-0.1000",
    ] {
        let (_, first) = get_json(&db, uri);
        let (_, second) = get_json(&db, uri);
        assert_eq!(first["source"], second["source"]);
        assert_eq!(first["name"], second["name"]);
        assert_eq!(first["valuationGBP"], second["valuationGBP"]);
    }
}

#[test]
fn outside_coverage_is_404_with_guidance() {
    let db = seeded_db("property_outside");

    let (status, body) = get_json(&db, "/property?lat=0&lng=0");

    assert_eq!(status, 404);
    assert_eq!(body["message"], COVERAGE_MESSAGE);
}

#[test]
fn malformed_coordinates_are_400() {
    let db = seeded_db("property_malformed");

    for uri in [
        "/property?lat=abc&lng=-0.1496",
        "/property?lat=51.5108",
        "/property",
        "/property?lat=NaN&lng=0",
        "/property?lat=95&lng=0",
    ] {
        let (status, body) = get_json(&db, uri);
        assert_eq!(status, 400, "{uri}");
        assert_eq!(
            body["message"],
            "Please provide valid lat and lng query parameters.",
            "{uri}"
        );
    }
}

#[test]
fn store_failure_is_generic_500() {
    let db = Database::new("/nonexistent-zone-insight-dir/store.sqlite");

    let (status, body) = get_json(&db, "/property?lat=51.5108&lng=-0.1496");

    assert_eq!(status, 500);
    assert_eq!(
        body["message"],
        "Unexpected error while fetching property insight."
    );
}
