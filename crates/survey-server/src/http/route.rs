//! Path + method routing.
//!
//! Paths are split on `/` and each segment is percent-decoded, so a section
//! name may contain spaces (`%20`) or slashes (`%2F`). Query strings are
//! ignored. Question indices stay raw here and are parsed by the handlers.

use tiny_http::Method;

use super::error::ApiError;

/// A resolved endpoint with its decoded path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Survey,
    Schema,
    AddSection,
    UpdateSection { section: String },
    DeleteSection { section: String },
    DeleteQuestion { section: String, index: String },
    AddQuestion { section: String },
    UpdateQuestion { section: String, index: String },
    GetQuestion { section: String, index: String },
    GetSection { section: String },
    GetSections,
}

impl Route {
    /// Resolve a request line to a route.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RouteNotFound` for unknown paths,
    /// `ApiError::MethodNotAllowed` when the path exists under another method,
    /// and `ApiError::Validation` for segments that do not decode to UTF-8.
    pub fn resolve(method: &Method, url: &str) -> Result<Self, ApiError> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let raw: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };
        if raw.iter().any(|segment| segment.is_empty()) {
            return Err(ApiError::RouteNotFound);
        }

        let (expected, route) = match raw.as_slice() {
            [] => (Method::Get, Self::Root),
            ["survey"] => (Method::Get, Self::Survey),
            ["schema"] => (Method::Get, Self::Schema),
            ["add-section"] => (Method::Post, Self::AddSection),
            ["get-sections"] => (Method::Get, Self::GetSections),
            ["update-section", name] => (
                Method::Put,
                Self::UpdateSection {
                    section: decode(name)?,
                },
            ),
            ["delete-section", name] => (
                Method::Delete,
                Self::DeleteSection {
                    section: decode(name)?,
                },
            ),
            ["add-question", name] => (
                Method::Post,
                Self::AddQuestion {
                    section: decode(name)?,
                },
            ),
            ["get-section", name] => (
                Method::Get,
                Self::GetSection {
                    section: decode(name)?,
                },
            ),
            ["delete-question", name, index] => (
                Method::Delete,
                Self::DeleteQuestion {
                    section: decode(name)?,
                    index: decode(index)?,
                },
            ),
            ["update-question", name, index] => (
                Method::Put,
                Self::UpdateQuestion {
                    section: decode(name)?,
                    index: decode(index)?,
                },
            ),
            ["get-question", name, index] => (
                Method::Get,
                Self::GetQuestion {
                    section: decode(name)?,
                    index: decode(index)?,
                },
            ),
            _ => return Err(ApiError::RouteNotFound),
        };

        if *method == expected {
            Ok(route)
        } else {
            Err(ApiError::MethodNotAllowed)
        }
    }
}

fn decode(segment: &str) -> Result<String, ApiError> {
    urlencoding::decode(segment)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ApiError::Validation(format!("path segment is not valid UTF-8: {e}")))
}
