use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Section;

/// Root document mirrored to the template file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Survey {
    pub survey: Vec<Section>,
}
