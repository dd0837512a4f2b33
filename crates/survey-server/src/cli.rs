use std::path::PathBuf;

use clap::Parser;
use figment::providers::Serialized;
use survey_config::{ConfigError, SurveyConfig};

/// Command-line flags for the `survey-server` binary.
#[derive(Debug, Parser)]
#[command(
    name = "survey-server",
    version,
    about = "Survey template management API"
)]
pub struct Cli {
    /// Config file (defaults to ./survey.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Survey template JSON file
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of request worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load layered config (with `.env`) and merge explicit flags on top.
    pub fn load_config(&self) -> Result<SurveyConfig, ConfigError> {
        SurveyConfig::load_dotenv();
        let mut figment = SurveyConfig::figment(self.config.as_deref())?;

        if let Some(template) = &self.template {
            figment = figment.merge(Serialized::default("store.template_path", template));
        }
        if let Some(host) = &self.host {
            figment = figment.merge(Serialized::default("server.host", host));
        }
        if let Some(port) = self.port {
            figment = figment.merge(Serialized::default("server.port", port));
        }
        if let Some(workers) = self.workers {
            figment = figment.merge(Serialized::default("server.workers", workers));
        }

        SurveyConfig::from_figment(figment)
    }
}
