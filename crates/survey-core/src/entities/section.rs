use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Question;

/// A named group of questions.
///
/// The `section` name is the lookup key for every keyed endpoint. Names are
/// not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Section {
    pub section: String,
    pub questions: Vec<Question>,
}
