//! # survey-config
//!
//! Layered configuration loading for the survey template server using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. An explicit config file (`--config`), or project-level `survey.toml`
//! 3. User-level `~/.config/survey/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are merged on top by the server binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SURVEY_SERVER__PORT` -> `server.port` and
//! `SURVEY_STORE__TEMPLATE_PATH` -> `store.template_path`.
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod error;
mod server;
mod store;

pub use error::ConfigError;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, resolved from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "survey.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SURVEY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SurveyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl SurveyConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `explicit` names a file that
    /// does not exist or a loaded value fails validation, and
    /// `ConfigError::Figment` if extraction fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(explicit)?)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Reads `.env` from the working directory (if any) before building the
    /// figment, so `SURVEY_*` values defined there take effect.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load(explicit)
    }

    /// Load `.env` from the working directory into the process environment.
    ///
    /// Silently does nothing if no `.env` is found. Variables already set in
    /// the environment are not overwritten.
    pub fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can merge additional providers (CLI flags) on top
    /// before calling [`Self::from_figment`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `explicit` does not exist.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: explicit file, else project-local config
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::InvalidValue {
                        field: "config".into(),
                        reason: format!("config file '{}' does not exist", path.display()),
                    });
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment)
    }

    /// Extract and validate a config from a prepared figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey").join("config.toml"))
    }
}
