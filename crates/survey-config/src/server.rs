//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default listen port.
const fn default_port() -> u16 {
    8000
}

/// Default number of request worker threads.
const fn default_workers() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1` or `0.0.0.0`.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of blocking worker threads pulling requests off the listener.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string accepted by `tiny_http::Server::http`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.workers".into(),
                reason: "at least one worker is required".into(),
            });
        }
        Ok(())
    }
}
