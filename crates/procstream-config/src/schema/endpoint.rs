use serde::{Deserialize, Serialize};

/// The remote processing endpoint the controller streams from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Event-stream URL, fetched with a plain `GET`.
    pub url: String,
    /// Seconds to wait for the TCP/TLS connection to be established.
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/api/process".into(),
            connect_timeout_secs: 10,
        }
    }
}
