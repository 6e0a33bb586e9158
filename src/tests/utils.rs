use crate::db::seed::seed_showcase;
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Body;
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A database handle on a fresh, empty temporary file.
pub fn temp_db(label: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "zone_insight_{label}_{}_{nanos}_{}.sqlite",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    Database::new(path.to_string_lossy().into_owned())
}

/// Initialize a fresh test DB with the schema and the showcase zone.
pub fn seeded_db(label: &str) -> Database {
    let db = temp_db(label);
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    seed_showcase(&db).unwrap_or_else(|e| panic!("Seeding failed: {e}"));
    db
}

/// Issue a GET through the router, returning the status and raw body.
pub fn get_raw(db: &Database, uri: &str) -> (u16, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, db);
    let status = resp.status().as_u16();

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    (status, body)
}

/// Issue a GET through the router, parsing the body as JSON.
pub fn get_json(db: &Database, uri: &str) -> (u16, serde_json::Value) {
    let (status, body) = get_raw(db, uri);
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("body of {uri} is not JSON ({e}): {body}"));
    (status, json)
}
