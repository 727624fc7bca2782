//! Storage configuration for the HealthProfile application
//!
//! The profiles file defaults to `health_profiles.txt` in the working
//! directory and can be moved with the `HEALTH_PROFILES_PATH` variable.

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Environment variable naming the profiles file
pub const PROFILES_PATH_VAR: &str = "HEALTH_PROFILES_PATH";

/// Default profiles file name
pub const DEFAULT_PROFILES_PATH: &str = "health_profiles.txt";

/// Configuration error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is present but holds no path
    #[error("{0} is set but empty")]
    EmptyPath(String),
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Path of the flat file holding every profile
    pub profiles_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profiles_path: PathBuf::from(DEFAULT_PROFILES_PATH),
        }
    }
}

impl StorageConfig {
    /// Create a new storage configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profiles_path = match lookup(PROFILES_PATH_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyPath(PROFILES_PATH_VAR.to_string()));
            }
            Some(value) => PathBuf::from(value.trim()),
            None => {
                info!("No {} provided, will use default path: {}", PROFILES_PATH_VAR, DEFAULT_PROFILES_PATH);
                PathBuf::from(DEFAULT_PROFILES_PATH)
            }
        };

        info!("Using profiles file at: {}", profiles_path.display());
        Ok(Self { profiles_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_when_unset() {
        let config = StorageConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorageConfig::default());
        assert_eq!(config.profiles_path, PathBuf::from("health_profiles.txt"));
    }

    #[test]
    fn test_path_from_variable() {
        let config = StorageConfig::from_lookup(|key| {
            (key == PROFILES_PATH_VAR).then(|| "/tmp/profiles.txt".to_string())
        })
        .unwrap();
        assert_eq!(config.profiles_path, PathBuf::from("/tmp/profiles.txt"));
    }

    #[test]
    fn test_blank_variable_is_an_error() {
        let result = StorageConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(result, Err(ConfigError::EmptyPath(PROFILES_PATH_VAR.to_string())));
    }
}
