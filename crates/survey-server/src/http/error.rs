//! HTTP-facing error taxonomy.

use survey_store::StoreError;
use thiserror::Error;

/// Errors a request can end in. Each maps to one status code and one
/// user-safe `detail` string; internal causes are only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the path.
    #[error("Not Found")]
    RouteNotFound,

    /// The path matches a route registered for a different method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Malformed body or path parameter.
    #[error("{0}")]
    Validation(String),

    /// The request body exceeds the per-request limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    /// The request body could not be read from the socket.
    #[error("failed to read request body: {0}")]
    Body(#[source] std::io::Error),

    /// Store lookup or persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::RouteNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Validation(_) => 422,
            Self::PayloadTooLarge { .. } => 413,
            Self::Body(_) => 400,
            Self::Store(error) if error.is_not_found() => 404,
            Self::Store(_) => 500,
        }
    }

    /// Message placed in the response `detail` field.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::PayloadTooLarge { .. } => "Request body too large".to_string(),
            Self::Body(_) => "Failed to read request body".to_string(),
            Self::Store(StoreError::Poisoned) => "Survey template unavailable".to_string(),
            Self::Store(error) if !error.is_not_found() => {
                "Failed to persist survey template".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ApiError::Store(StoreError::SectionNotFound), 404, "Section not found")]
    #[case(
        ApiError::Store(StoreError::QuestionOutOfRange),
        404,
        "Question index out of range"
    )]
    #[case(ApiError::RouteNotFound, 404, "Not Found")]
    #[case(ApiError::MethodNotAllowed, 405, "Method Not Allowed")]
    #[case(ApiError::Validation("bad".into()), 422, "bad")]
    #[case(ApiError::Store(StoreError::Poisoned), 500, "Survey template unavailable")]
    #[case(ApiError::PayloadTooLarge { limit: 16 }, 413, "Request body too large")]
    fn status_and_detail(#[case] error: ApiError, #[case] status: u16, #[case] detail: &str) {
        assert_eq!(error.status(), status);
        assert_eq!(error.detail(), detail);
    }

    #[test]
    fn persistence_errors_hide_internals() {
        let error = ApiError::Store(StoreError::Write {
            path: "/secret/location.json".into(),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(error.status(), 500);
        assert_eq!(error.detail(), "Failed to persist survey template");
        assert!(!error.detail().contains("secret"));
    }
}
