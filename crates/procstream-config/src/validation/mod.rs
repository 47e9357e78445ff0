//! Full configuration validation.
//!
//! Every section is checked and all problems are collected into a single
//! `ConfigError`, so a user sees everything wrong with a file at once.

mod endpoint;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ProcstreamConfig;
use procstream_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ProcstreamConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    validate_non_empty(&mut errors, "log.level", &config.log.level);
    validate_range(&mut errors, "run.sessions", config.run.sessions, 1, 100);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
