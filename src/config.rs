//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Directory holding the local key-value store
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the PORT mutations cannot race each other.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");
        env::remove_var("DATA_DIR");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.data_dir, PathBuf::from("data"));

        env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        env::remove_var("PORT");
        assert!(matches!(result, Err(ConfigError::Invalid("PORT", _))));
    }
}
