use crate::db::Database;
use crate::domain::{resolve_property, ZoneStore};
use crate::errors::ServerError;
use crate::geos::GeoPoint;
use crate::responses::{
    error_to_response, json_response, preflight_response, PropertyInsight, ResultResp,
};
use astra::{Request, Response};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error, info};

const ZONES_FAILURE: &str = "Unable to load showcase zones.";
const PROPERTY_FAILURE: &str = "Unexpected error while fetching property insight.";

/// Routes a request and always produces a response; errors become JSON
/// `{ "message": .. }` bodies.
pub fn handle(req: Request, db: &Database) -> Response {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    let result = match (method.as_str(), path.as_str()) {
        ("OPTIONS", _) => preflight_response(),
        ("GET", "/health") => health(db),
        ("GET", "/zones") => zones(db).map_err(|e| conceal_store_error(e, ZONES_FAILURE)),
        ("GET", "/property") => {
            property(&req, db).map_err(|e| conceal_store_error(e, PROPERTY_FAILURE))
        }
        _ => Err(ServerError::NotFound),
    };

    result.unwrap_or_else(error_to_response)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Health {
    status: &'static str,
    db_connected: bool,
}

fn health(db: &Database) -> ResultResp {
    let db_connected = db.ping().is_ok();
    json_response(200, &Health { status: "ok", db_connected })
}

fn zones(db: &Database) -> ResultResp {
    let zones = db.list_zones()?;
    json_response(200, &zones)
}

fn property(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let point = GeoPoint::parse(
        params.get("lat").map(String::as_str),
        params.get("lng").map(String::as_str),
    )?;

    // Request-scoped generator; only the simulated tier draws from it.
    let mut rng = StdRng::from_entropy();
    let resolution = resolve_property(db, point, &mut rng)?;

    info!(
        source = resolution.source.as_str(),
        zone = %resolution.zone.slug,
        lat = point.lat,
        lng = point.lng,
        "resolved property insight"
    );
    json_response(200, &PropertyInsight::from(&resolution))
}

/// Logs store failures with their detail and swaps them for the route's
/// public message. Other errors pass through.
fn conceal_store_error(err: ServerError, public: &'static str) -> ServerError {
    match err {
        ServerError::DbError(detail) => {
            error!(%detail, "{public}");
            ServerError::Unavailable(public)
        }
        ServerError::InternalError => {
            error!("internal error: {public}");
            ServerError::Unavailable(public)
        }
        other => other,
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
