//! TOML configuration.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section is optional; omitted values take the defaults shown.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"receipt_points=debug"`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("server.bind is not a socket address: '{}'", self.server.bind))
    }
}

/// Loads configuration from `path`, or returns defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            parse_config(&content)?
        }
        None => Config::default(),
    };
    validate(&config)?;
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).with_context(|| "Failed to parse config file")
}

fn validate(config: &Config) -> Result<()> {
    config.bind_addr()?;

    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = parse_config("[server]\nbind = \"127.0.0.1:9000\"\n").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let config = parse_config("[server]\nbind = \"localhost\"\n").unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_level_rejected() {
        let config = parse_config("[logging]\nlevel = \" \"\n").unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/receipt-points.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
