use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub service_name: String,
    pub endpoint_name: String,
    pub catalog_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            service_name: "music-service".to_string(),
            endpoint_name: "music-service".to_string(),
            catalog_path: PathBuf::from("data/catalog.json"),
        }
    }
}

impl Config {
    /// Defaults overridden by `MUSIC_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("MUSIC_WORKER_ADDR") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "MUSIC_WORKER_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup("MUSIC_SERVICE_NAME") {
            config.service_name = value;
        }
        if let Some(value) = lookup("MUSIC_ENDPOINT_NAME") {
            config.endpoint_name = value;
        }
        if let Some(value) = lookup("MUSIC_CATALOG_PATH") {
            config.catalog_path = PathBuf::from(value);
        }

        Ok(config)
    }
}
