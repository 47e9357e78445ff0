//! procstream configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use procstream_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ProcstreamConfig;
pub use toml_loader::{create_default_config, default_config_path};

use procstream_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The platform default is created with commented defaults if missing.
/// Invalid values are reported as `ConfigError::ValidationError`.
pub fn load_config(path: Option<&Path>) -> Result<ProcstreamConfig, ConfigError> {
    toml_loader::load_or_default(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ProcstreamConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
