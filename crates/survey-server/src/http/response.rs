//! JSON response envelope and conversion to `tiny_http` responses.

use std::io::Cursor;

use serde::Serialize;
use survey_core::ErrorBody;

use super::error::ApiError;

/// A status code plus a serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Serialize `value` as the response body.
    #[must_use]
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { status, body },
            Err(error) => {
                tracing::error!(%error, "failed to serialize response body");
                Self {
                    status: 500,
                    body: error_body("Failed to serialize response"),
                }
            }
        }
    }

    #[must_use]
    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self::json(200, value)
    }

    #[must_use]
    pub fn created<T: Serialize>(value: &T) -> Self {
        Self::json(201, value)
    }

    /// `{"detail": ...}` body for an error.
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self {
            status: error.status(),
            body: error_body(&error.detail()),
        }
    }

    /// Parse the body back into JSON, for asserting on responses in tests.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Convert into a `tiny_http` response with a JSON content type.
    #[must_use]
    pub fn into_http(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let response = tiny_http::Response::from_data(self.body).with_status_code(self.status);
        match tiny_http::Header::from_bytes("Content-Type", "application/json") {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

fn error_body(detail: &str) -> Vec<u8> {
    // ErrorBody holds a single string; serialization cannot fail.
    serde_json::to_vec(&ErrorBody::new(detail)).unwrap_or_default()
}
