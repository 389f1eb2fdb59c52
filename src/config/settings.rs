// Configuration structs

use anyhow::{bail, Context};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_MAX_BODY_BYTES, DEFAULT_SAMPLES_DIR};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings (`[server]` in config.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:54568")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory of ready-made samples, relative to the working directory
    #[serde(default = "default_samples_dir")]
    pub samples_dir: PathBuf,
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Origins allowed to call the API cross-origin; empty disables CORS
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            samples_dir: default_samples_dir(),
            max_body_bytes: default_max_body_bytes(),
            cors_origins: vec![],
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_samples_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SAMPLES_DIR)
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server.socket_addr()?;

        if self.server.max_body_bytes == 0 {
            bail!("server.max_body_bytes must be greater than zero");
        }

        for origin in &self.server.cors_origins {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {:?}", origin))?;
        }

        Ok(())
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {:?}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_address, "0.0.0.0:54568");
        assert_eq!(config.server.samples_dir, PathBuf::from("samples"));
        assert_eq!(config.server.max_body_bytes, 32 * 1024 * 1024);
        assert!(config.server.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            samples_dir = "/srv/samples"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.samples_dir, PathBuf::from("/srv/samples"));
        assert_eq!(config.server.bind_address, "0.0.0.0:54568");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = "localhost-ish".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid bind address"));
    }

    #[test]
    fn test_validate_rejects_zero_body_limit() {
        let mut config = Config::default();
        config.server.max_body_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let mut config = Config::default();
        config.server.cors_origins = vec!["http://ok.example".into(), "bad\norigin".into()];
        assert!(config.validate().is_err());
    }
}
