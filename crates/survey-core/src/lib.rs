//! # survey-core
//!
//! Data model for the survey template service.
//!
//! This crate provides the types shared by the store and the HTTP layer:
//! - Entity structs for the persisted document (`Survey`, `Section`, `Question`)
//! - Request bodies accepted by the mutating endpoints
//! - Response bodies returned as JSON by the server
//!
//! Types carry no behavior beyond serde and `JsonSchema` derives. Lookup and
//! mutation rules live in `survey-store`.

pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Question, Section, Survey};
pub use requests::{QuestionCreate, SectionUpdate};
pub use responses::{ErrorBody, MessageResponse, StatusResponse};
