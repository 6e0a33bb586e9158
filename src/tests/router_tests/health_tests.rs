use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::tests::utils::{get_json, get_raw, seeded_db};
use astra::Body;
use http::{Method, Request};

#[test]
fn health_reports_connected_store() {
    let db = seeded_db("health_ok");

    let (status, body) = get_json(&db, "/health");

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dbConnected"], true);
}

#[test]
fn health_is_ok_even_when_store_is_unreachable() {
    let db = Database::new("/nonexistent-zone-insight-dir/store.sqlite");

    let (status, body) = get_json(&db, "/health");

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dbConnected"], false);
}

#[test]
fn init_db_fails_when_store_is_unreachable() {
    let db = Database::new("/nonexistent-zone-insight-dir/store.sqlite");

    let err = init_db(&db).unwrap_err();

    assert!(matches!(err, ServerError::DbError(_)), "{err:?}");
}

#[test]
fn unknown_route_is_404_json() {
    let db = seeded_db("unknown_route");

    let (status, body) = get_json(&db, "/nope");

    assert_eq!(status, 404);
    assert_eq!(body["message"], "Not Found");
}

#[test]
fn responses_allow_cross_origin() {
    let db = seeded_db("cors");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = crate::router::handle(req, &db);

    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[test]
fn preflight_is_answered() {
    let db = seeded_db("preflight");

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/property")
        .body(Body::empty())
        .unwrap();
    let resp = crate::router::handle(req, &db);

    assert_eq!(resp.status(), 204);
    assert!(resp.headers().contains_key("Access-Control-Allow-Methods"));
}

#[test]
fn post_is_not_routed() {
    let db = seeded_db("post");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/zones")
        .body(Body::empty())
        .unwrap();
    let resp = crate::router::handle(req, &db);

    assert_eq!(resp.status(), 404);
    let (status, _) = get_raw(&db, "/zones");
    assert_eq!(status, 200);
}
