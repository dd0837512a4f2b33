//! Response bodies returned as JSON by the survey server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    /// The fixed liveness message.
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: "API is up and running".to_string(),
        }
    }
}

/// Response from every successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
