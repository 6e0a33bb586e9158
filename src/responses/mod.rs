pub mod errors;
pub mod insight;
pub mod json;

pub use errors::{error_to_response, ResultResp};
pub use insight::PropertyInsight;
pub use json::{json_response, preflight_response};
