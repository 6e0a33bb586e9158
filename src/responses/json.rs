// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// The map client is served from another origin.
pub const ALLOW_ORIGIN: &str = "*";

/// Serialize `body` as a JSON response with the given status.
pub fn json_response<T: Serialize>(status: u16, body: &T) -> ResultResp {
    let bytes = serde_json::to_vec(body).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

/// Answer to a CORS preflight request.
pub fn preflight_response() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
