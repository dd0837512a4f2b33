//! Template file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_template_path() -> PathBuf {
    PathBuf::from("survey_template.json")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON file holding the survey template. Relative paths resolve against
    /// the working directory.
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
        }
    }
}

impl StoreConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.template_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.template_path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
