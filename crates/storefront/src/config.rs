//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MANGASTORE_DATA_DIR` - Directory holding the persistent store
//!
//! ## Optional
//! - `MANGASTORE_SEED` - Seed the sample catalog on first run (default: true)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the key-value store persists into.
    pub data_dir: PathBuf,
    /// Whether to seed the sample catalog when the products key is absent.
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MANGASTORE_DATA_DIR` is missing or
    /// `MANGASTORE_SEED` is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_required_env("MANGASTORE_DATA_DIR")?.into();
        let seed = get_env_or_default("MANGASTORE_SEED", "true")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar("MANGASTORE_SEED".to_string(), e.to_string()))?;

        Ok(Self { data_dir, seed })
    }

    /// Build a configuration for an explicit data directory, seeding enabled.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            seed: true,
        }
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
