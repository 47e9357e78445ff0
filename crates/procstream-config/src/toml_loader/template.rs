//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# procstream configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# Event-stream endpoint; the literal payload FINISHED ends a session.
url = "http://localhost:8080/api/process"
# connect_timeout_secs = 10   # 1-300

[log]
# Any tracing EnvFilter directive. RUST_LOG and --log-level take precedence.
# level = "procstream=info"

[run]
# sessions = 1               # 1-100, started one after another
# show_status = true
"##
    .to_string()
}
