//! # survey-server
//!
//! HTTP CRUD API over the survey template.
//!
//! - [`http`]: routing, handlers, and the JSON error taxonomy
//! - [`server`]: the `tiny_http` listener and its worker threads
//!
//! Every mutating endpoint goes through [`survey_store::TemplateStore`], which
//! rewrites the template file before the response is sent.

pub mod http;
pub mod server;

pub use server::{ServerError, ShutdownHandle, SurveyServer};
