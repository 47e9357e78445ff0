pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, ProcstreamError, TransportError};
pub use events::{ControllerEvent, EventBus, SessionState};
pub use id::{new_correlation_id, SessionId, SessionIdGen};
