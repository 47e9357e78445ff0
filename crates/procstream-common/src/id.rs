use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id used to correlate the log lines of one connection.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Generation number of one streaming session.
///
/// Every transport event is tagged with the id of the session that opened
/// the connection, so events from an abandoned session can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`SessionId`]s. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct SessionIdGen {
    last: u64,
}

impl SessionIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> SessionId {
        self.last = self.last.saturating_add(1);
        SessionId(self.last)
    }
}
