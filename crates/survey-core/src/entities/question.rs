use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single survey question. Identified only by its position in the section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    /// Free-form question kind, e.g. `"text"` or `"multiple_choice"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    pub options: Vec<String>,
}
