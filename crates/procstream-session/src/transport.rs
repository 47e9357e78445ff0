//! The event-source capability the session controller is written against.
//!
//! A transport opens one connection per session and reports what happens on
//! it through an [`EventSink`]. Every event carries the [`SessionId`] it was
//! opened for, so the controller can drop events from sessions it has
//! already abandoned.

use procstream_common::{SessionId, TransportError};
use tokio::sync::mpsc;

/// What happened on a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEventKind {
    /// The stream was accepted by the server.
    Opened,
    /// One message event with its text payload.
    Data(String),
    /// The connection failed; nothing further follows.
    Error(TransportError),
}

/// A transport callback tagged with the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportEvent {
    pub session: SessionId,
    pub kind: TransportEventKind,
}

/// Handle given to a transport for reporting events of one connection.
///
/// Sending never blocks. Once the controller is gone, sends are dropped and
/// the helpers return `false`.
#[derive(Debug, Clone)]
pub struct EventSink {
    session: SessionId,
    tx: mpsc::UnboundedSender<TransportEvent>,
}

impl EventSink {
    pub fn new(session: SessionId, tx: mpsc::UnboundedSender<TransportEvent>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn opened(&self) -> bool {
        self.send(TransportEventKind::Opened)
    }

    pub fn data(&self, text: impl Into<String>) -> bool {
        self.send(TransportEventKind::Data(text.into()))
    }

    pub fn error(&self, err: TransportError) -> bool {
        self.send(TransportEventKind::Error(err))
    }

    fn send(&self, kind: TransportEventKind) -> bool {
        self.tx
            .send(TransportEvent {
                session: self.session,
                kind,
            })
            .is_ok()
    }
}

/// A live connection. Closing releases it.
pub trait Connection {
    /// Release the connection. Calling it again has no effect.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// Opens streaming connections.
pub trait Transport {
    type Connection: Connection;

    /// Open a connection to `url`, reporting its events through `sink`.
    ///
    /// An `Err` means no connection was acquired and no event will be sent.
    fn open(&mut self, url: &str, sink: EventSink) -> Result<Self::Connection, TransportError>;
}
