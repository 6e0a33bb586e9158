// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, validation, coverage) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    /// Malformed client input. The message is safe to show to the client.
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// No zone contains the requested point.
    #[error("point is outside every covered zone")]
    OutsideCoverage,
    /// The store could not be reached or answered with an error.
    /// Carries internal detail that must never reach the client.
    #[error("Database Error: {0}")]
    DbError(String),
    /// A store failure that has already been logged, surfaced with a
    /// route-specific public message.
    #[error("{0}")]
    Unavailable(&'static str),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}

/// Startup failures: the process must not start serving traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
