//! Request dispatch for the survey API.
//!
//! [`handle`] is transport-agnostic: it takes a method, URL and body and
//! returns an [`ApiResponse`]. The `tiny_http` loop in [`crate::server`] is a
//! thin shell around it.

mod error;
mod handlers;
mod route;
mod response;

pub use error::ApiError;
pub use response::ApiResponse;
pub use route::Route;

use survey_store::TemplateStore;
use tiny_http::Method;

/// Route and execute one request.
pub fn handle(store: &TemplateStore, method: &Method, url: &str, body: &[u8]) -> ApiResponse {
    let result = Route::resolve(method, url).and_then(|route| dispatch(store, &route, body));
    match result {
        Ok(response) => {
            tracing::debug!(%method, %url, status = response.status, "request handled");
            response
        }
        Err(error) => {
            let response = ApiResponse::error(&error);
            if response.status >= 500 {
                tracing::error!(%method, %url, status = response.status, %error, "request failed");
            } else {
                tracing::warn!(%method, %url, status = response.status, %error, "request rejected");
            }
            response
        }
    }
}

fn dispatch(store: &TemplateStore, route: &Route, body: &[u8]) -> Result<ApiResponse, ApiError> {
    match route {
        Route::Root => Ok(handlers::root()),
        Route::Survey => handlers::get_survey(store),
        Route::Schema => Ok(handlers::schema()),
        Route::AddSection => handlers::add_section(store, body),
        Route::UpdateSection { section } => handlers::update_section(store, section, body),
        Route::DeleteSection { section } => handlers::delete_section(store, section),
        Route::DeleteQuestion { section, index } => {
            handlers::delete_question(store, section, index)
        }
        Route::AddQuestion { section } => handlers::add_question(store, section, body),
        Route::UpdateQuestion { section, index } => {
            handlers::update_question(store, section, index, body)
        }
        Route::GetQuestion { section, index } => handlers::get_question(store, section, index),
        Route::GetSection { section } => handlers::get_section(store, section),
        Route::GetSections => handlers::get_sections(store),
    }
}
