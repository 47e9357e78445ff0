use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Any failure of the streaming connection itself.
///
/// The session controller treats every variant the same way (one log entry,
/// session abandoned); the variants only exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connect failed: {0}")]
    Connect(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("unexpected content type: {0}")]
    ContentType(String),

    #[error("stream read failed: {0}")]
    Read(String),

    #[error("stream ended before completion")]
    StreamEnded,

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProcstreamError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("endpoint.url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: endpoint.url is empty"
        );

        let err = ConfigError::AlreadyExists(PathBuf::from("/tmp/config.toml"));
        assert_eq!(
            err.to_string(),
            "config file already exists: /tmp/config.toml (use --force to overwrite)"
        );
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::Connect("connection refused".into());
        assert_eq!(err.to_string(), "connect failed: connection refused");

        let err = TransportError::Status(503);
        assert_eq!(err.to_string(), "unexpected HTTP status 503");

        let err = TransportError::ContentType("text/html".into());
        assert_eq!(err.to_string(), "unexpected content type: text/html");

        let err = TransportError::StreamEnded;
        assert_eq!(err.to_string(), "stream ended before completion");
    }

    #[test]
    fn procstream_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ProcstreamError = config_err.into();
        assert!(matches!(err, ProcstreamError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn procstream_error_from_transport() {
        let err: ProcstreamError = TransportError::Read("reset by peer".into()).into();
        assert!(matches!(err, ProcstreamError::Transport(_)));
        assert!(err.to_string().contains("reset by peer"));
    }

    #[test]
    fn procstream_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProcstreamError = io_err.into();
        assert!(matches!(err, ProcstreamError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn procstream_error_other() {
        let err = ProcstreamError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
