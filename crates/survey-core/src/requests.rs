//! Request bodies accepted by the mutating endpoints.
//!
//! Bodies are validated by deserialization alone: every field is required and
//! must have the right JSON type. Unknown fields are ignored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Question, Section};

/// Body of `POST /add-question/{name}` and `PUT /update-question/{name}/{idx}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionCreate {
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<QuestionCreate> for Question {
    fn from(body: QuestionCreate) -> Self {
        Self {
            kind: body.kind,
            question: body.question,
            options: body.options,
        }
    }
}

/// Body of `POST /add-section` and `PUT /update-section/{name}`.
///
/// The stored section takes its name from the body, so an update may rename
/// the section it replaces.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionUpdate {
    pub section: String,
    pub questions: Vec<QuestionCreate>,
}

impl From<SectionUpdate> for Section {
    fn from(body: SectionUpdate) -> Self {
        Self {
            section: body.section,
            questions: body.questions.into_iter().map(Question::from).collect(),
        }
    }
}
