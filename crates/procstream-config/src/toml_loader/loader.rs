//! Core TOML config loading: read from path or platform default.

use crate::schema::ProcstreamConfig;
use crate::validation;
use procstream_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Values that fail validation
/// are an error: the file is never silently replaced by defaults.
pub fn load_from_path(path: &Path) -> Result<ProcstreamConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ProcstreamConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config).map_err(|e| match e {
        ConfigError::ValidationError(msg) => {
            ConfigError::ValidationError(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/procstream/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ProcstreamConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path, false)?;
            Ok(ProcstreamConfig::default())
        }
        result => result,
    }
}

/// Load from `path` when given, the platform default otherwise.
///
/// An explicit path that does not exist is an error; it is never created.
pub fn load_or_default(path: Option<&Path>) -> Result<ProcstreamConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}
