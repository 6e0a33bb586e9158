use crate::errors::ServerError;
use crate::responses::json::{json_response, ALLOW_ORIGIN};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

pub type ResultResp = Result<Response, ServerError>;

pub const COVERAGE_MESSAGE: &str = "This prototype currently focuses on the Westminster & Soho \
    showcase zone. Try clicking inside the highlighted area to explore seeded properties.";

const GENERIC_FAILURE: &str = "Unexpected server error.";

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub message: &'a str,
}

/// Convert a ServerError into a JSON `{ "message": .. }` response.
/// Store detail carried by `DbError` is never put in the body.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found"),
        ServerError::BadRequest(msg) => (400, msg.as_str()),
        ServerError::OutsideCoverage => (404, COVERAGE_MESSAGE),
        ServerError::Unavailable(msg) => (500, *msg),
        ServerError::DbError(_) | ServerError::InternalError => (500, GENERIC_FAILURE),
    };

    json_response(status, &ErrorBody { message }).unwrap_or_else(|_| fallback_response())
}

fn fallback_response() -> Response {
    ResponseBuilder::new()
        .status(500)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(Body::from("Internal Server Error"))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
