//! Error wire format
//!
//! Every non-2xx response of the reporting API carries the same body:
//!
//! ```json
//! { "message": "Not Found", "status": 404, "type": "error" }
//! ```

use serde::{Deserialize, Serialize};

/// Value of the `type` field on every error body
pub const ERROR_TYPE: &str = "error";

/// Message used for unknown routes
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Message used for any 5xx response (details stay in the server log)
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Message used when a request runs past the server's timeout
pub const TIMEOUT_MESSAGE: &str = "Request Timeout";

/// Structured error body `{message, status, type}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorBody {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            kind: ERROR_TYPE.to_string(),
        }
    }

    /// The fixed body returned for unmatched routes
    pub fn not_found() -> Self {
        Self::new(404, NOT_FOUND_MESSAGE)
    }
}
