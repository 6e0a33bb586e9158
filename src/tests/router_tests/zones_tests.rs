use crate::db::Database;
use crate::tests::utils::{get_json, seeded_db, temp_db};

#[test]
fn lists_seeded_zone() {
    let db = seeded_db("zones_list");

    let (status, body) = get_json(&db, "/zones");

    assert_eq!(status, 200);
    let zones = body.as_array().expect("zones array");
    assert_eq!(zones.len(), 1);

    let zone = &zones[0];
    assert_eq!(zone["slug"], "central-london-westminster");
    assert_eq!(zone["name"], "Westminster & Soho Showcase Zone");
    assert_eq!(zone["color"], "#f97316");
    assert_eq!(zone["summary"]["medianRent"], 4200);
    assert_eq!(zone["summary"]["primaryPropertyType"], "Prime apartments & period townhouses");
    assert_eq!(zone["geometry"]["type"], "Polygon");
    assert_eq!(zone["geometry"]["coordinates"][0][0][0], -0.1606);
    assert!(zone["id"].is_i64());
    assert!(zone["updatedAt"].is_string());
}

#[test]
fn empty_store_lists_no_zones() {
    let db = temp_db("zones_empty");
    crate::db::init_db(&db).unwrap();

    let (status, body) = get_json(&db, "/zones");

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!([]));
}

#[test]
fn store_failure_is_generic_500() {
    let db = Database::new("/nonexistent-zone-insight-dir/store.sqlite");

    let (status, body) = get_json(&db, "/zones");

    assert_eq!(status, 500);
    assert_eq!(body["message"], "Unable to load showcase zones.");
    assert!(!body.to_string().contains("Open DB failed"));
}
