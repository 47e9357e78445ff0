//! The `config` subcommands.

use std::path::Path;

use procstream_common::ProcstreamError;
use procstream_config::{config_to_json, create_default_config, default_config_path, ProcstreamConfig};

/// Write the default config to `path`, refusing to overwrite unless `force`.
pub fn init(path: &Path, force: bool) -> Result<(), ProcstreamError> {
    create_default_config(path, force)?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn show(config: &ProcstreamConfig) {
    println!("{}", config_to_json(config));
}

pub fn path() -> Result<(), ProcstreamError> {
    println!("{}", default_config_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_then_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "[run]\nsessions = 2\n").unwrap();
        let err = init(&path, false).unwrap_err();
        assert!(matches!(
            err,
            ProcstreamError::Config(procstream_common::ConfigError::AlreadyExists(_))
        ));
        assert!(err.to_string().contains("already exists"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("sessions = 2"));

        init(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[endpoint]"));
    }
}
