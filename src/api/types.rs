//! API response types.

use serde::Serialize;

/// Outcome envelope returned by the digest endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// `"success"` or `"error"`
    pub status: &'static str,

    /// Human-readable outcome; on failure, the stringified error
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
