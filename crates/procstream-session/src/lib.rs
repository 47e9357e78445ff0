//! Streaming session engine for procstream.
//!
//! Provides:
//! - `SessionController`, the connection lifecycle state machine
//! - the `Transport` / `Connection` capability traits it drives
//! - an event-stream (SSE) decoder
//! - `HttpEventSource`, a reqwest-backed transport

pub mod controller;
pub mod http;
pub mod message_log;
pub mod sse;
pub mod transport;

pub use controller::{
    SessionController, ERROR_ENTRY, FINISHED_ENTRY, FINISHED_SENTINEL, OPENED_ENTRY,
};
pub use http::{HttpConnection, HttpEventSource};
pub use message_log::MessageLog;
pub use procstream_common::{ControllerEvent, SessionId, SessionState, TransportError};
pub use sse::{SseDecoder, SseEvent};
pub use transport::{Connection, EventSink, Transport, TransportEvent, TransportEventKind};
