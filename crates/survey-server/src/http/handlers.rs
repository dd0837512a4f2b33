//! One handler per endpoint.
//!
//! Path and body validation happen before the store is touched, so a 422
//! always wins over a 404 for the same request.

use std::num::IntErrorKind;

use serde::de::DeserializeOwned;
use survey_core::{
    MessageResponse, Question, QuestionCreate, Section, SectionUpdate, StatusResponse, Survey,
};
use survey_store::TemplateStore;

use super::error::ApiError;
use super::response::ApiResponse;

pub fn root() -> ApiResponse {
    ApiResponse::ok(&StatusResponse::up())
}

pub fn get_survey(store: &TemplateStore) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::ok(&store.snapshot()?))
}

/// JSON Schema of the persisted document.
pub fn schema() -> ApiResponse {
    ApiResponse::ok(&schemars::schema_for!(Survey))
}

pub fn add_section(store: &TemplateStore, body: &[u8]) -> Result<ApiResponse, ApiError> {
    let section: Section = parse_body::<SectionUpdate>(body)?.into();
    tracing::info!(section = %section.section, "adding section");
    store.add_section(section)?;
    Ok(ApiResponse::created(&MessageResponse::new(
        "Section added successfully",
    )))
}

pub fn update_section(
    store: &TemplateStore,
    name: &str,
    body: &[u8],
) -> Result<ApiResponse, ApiError> {
    let section: Section = parse_body::<SectionUpdate>(body)?.into();
    tracing::info!(section = %name, "updating section");
    store.update_section(name, section)?;
    Ok(ApiResponse::ok(&MessageResponse::new(
        "Section updated successfully",
    )))
}

pub fn delete_section(store: &TemplateStore, name: &str) -> Result<ApiResponse, ApiError> {
    let removed = store.delete_section(name)?;
    tracing::info!(section = %name, removed, "deleted section");
    Ok(ApiResponse::ok(&MessageResponse::new(
        "Section deleted successfully",
    )))
}

pub fn delete_question(
    store: &TemplateStore,
    name: &str,
    raw_index: &str,
) -> Result<ApiResponse, ApiError> {
    let index = parse_index(raw_index)?;
    store.delete_question(name, index)?;
    tracing::info!(section = %name, index, "deleted question");
    Ok(ApiResponse::ok(&MessageResponse::new(
        "Question deleted successfully",
    )))
}

pub fn add_question(
    store: &TemplateStore,
    name: &str,
    body: &[u8],
) -> Result<ApiResponse, ApiError> {
    let question: Question = parse_body::<QuestionCreate>(body)?.into();
    let index = store.add_question(name, question)?;
    tracing::info!(section = %name, index, "added question");
    Ok(ApiResponse::created(&MessageResponse::new(
        "Question added successfully",
    )))
}

pub fn update_question(
    store: &TemplateStore,
    name: &str,
    raw_index: &str,
    body: &[u8],
) -> Result<ApiResponse, ApiError> {
    let index = parse_index(raw_index)?;
    let question: Question = parse_body::<QuestionCreate>(body)?.into();
    store.update_question(name, index, question)?;
    tracing::info!(section = %name, index, "updated question");
    Ok(ApiResponse::ok(&MessageResponse::new(
        "Question updated successfully",
    )))
}

pub fn get_question(
    store: &TemplateStore,
    name: &str,
    raw_index: &str,
) -> Result<ApiResponse, ApiError> {
    let index = parse_index(raw_index)?;
    Ok(ApiResponse::ok(&store.question(name, index)?))
}

pub fn get_section(store: &TemplateStore, name: &str) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::ok(&store.section(name)?))
}

pub fn get_sections(store: &TemplateStore) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::ok(&store.sections()?))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(format!("invalid request body: {e}")))
}

/// Integers past the `i64` range saturate; the store then reports them as
/// out of range after resolving the section.
fn parse_index(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(index) => Ok(index),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) => Err(ApiError::Validation(format!(
            "question_idx must be an integer, got '{raw}'"
        ))),
    }
}
