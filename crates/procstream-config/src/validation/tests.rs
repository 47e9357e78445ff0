//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ProcstreamConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn https_url_is_accepted() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.url = "https://example.com/api/process".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_url() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.url must not be empty"));
    assert!(!err.contains("http://"));
}

#[test]
fn catches_non_http_scheme() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.url = "ws://localhost:8080/api/process".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.url"));
}

#[test]
fn catches_zero_connect_timeout() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.connect_timeout_secs"));
}

#[test]
fn catches_connect_timeout_too_large() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.connect_timeout_secs = 301;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_log_level() {
    let mut config = ProcstreamConfig::default();
    config.log.level = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("log.level"));
}

#[test]
fn catches_session_count_out_of_range() {
    let mut config = ProcstreamConfig::default();
    config.run.sessions = 0;
    assert!(validate(&config).is_err());

    config.run.sessions = 101;
    assert!(validate(&config).is_err());
}

#[test]
fn collects_multiple_errors() {
    let mut config = ProcstreamConfig::default();
    config.endpoint.url = "localhost".into();
    config.run.sessions = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.url"));
    assert!(err.contains("run.sessions"));
}
