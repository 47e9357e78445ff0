use serde::{Deserialize, Serialize};

/// Defaults for the `run` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of sessions started one after another.
    pub sessions: u32,
    /// Print the "Connecting..." status line while waiting for the open.
    pub show_status: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sessions: 1,
            show_status: true,
        }
    }
}
