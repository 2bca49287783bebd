//! Configuration loader for the fitness coach service.
//!
//! Reads `fitcoach.toml` and deserializes it into [`FitcoachConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use fitcoach_types::config::FitcoachConfig;
use fitcoach_types::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FITCOACH_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "fitcoach.toml";

/// Pick the config file to read.
///
/// Priority: explicit path (`--config`), then `$FITCOACH_CONFIG`, then
/// `./fitcoach.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    let from_env = std::env::var(CONFIG_ENV).ok();
    resolve_from(explicit, from_env.as_deref())
}

fn resolve_from(explicit: Option<&Path>, from_env: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match from_env.map(str::trim) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`FitcoachConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(path: &Path) -> FitcoachConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return FitcoachConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return FitcoachConfig::default();
        }
    };

    match toml::from_str::<FitcoachConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            FitcoachConfig::default()
        }
    }
}

/// Check the fields that have no usable default.
///
/// Run once at startup, before any provider client is built.
pub fn validate(config: &FitcoachConfig) -> Result<(), ConfigError> {
    if config.vector_store.host.trim().is_empty() {
        return Err(ConfigError::MissingValue {
            section: "vector_store",
            field: "host",
        });
    }
    if config.embedding.base_url.trim().is_empty() {
        return Err(ConfigError::MissingValue {
            section: "embedding",
            field: "base_url",
        });
    }
    if config.completion.base_url.trim().is_empty() {
        return Err(ConfigError::MissingValue {
            section: "completion",
            field: "base_url",
        });
    }
    Ok(())
}
