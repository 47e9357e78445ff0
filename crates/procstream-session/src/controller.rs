//! Lifecycle of one logical streaming session.
//!
//! `SessionController` owns the message log and at most one live
//! connection. It is driven from a single task: `start()` from the user,
//! `handle()` for each transport event. Transports never touch controller
//! state, they only queue tagged events, and events whose session id is not
//! the live one are dropped.
//!
//! ```text
//! Idle ──start──▶ Connecting ──opened──▶ Open ──data──▶ Open
//!                     │                   │
//!                     └──── error / FINISHED ────▶ Terminated ──start──▶ Connecting
//! ```


use procstream_common::{
    ControllerEvent, EventBus, SessionId, SessionIdGen, SessionState, TransportError,
};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::message_log::MessageLog;
use crate::transport::{Connection, EventSink, Transport, TransportEvent, TransportEventKind};

/// Payload that marks normal completion of a stream.
pub const FINISHED_SENTINEL: &str = "FINISHED";
/// Appended when the server accepts the stream.
pub const OPENED_ENTRY: &str = "Connection opened!";
/// Appended when the sentinel arrives.
pub const FINISHED_ENTRY: &str = "Processing finished!";
/// Appended when the connection fails for any reason.
pub const ERROR_ENTRY: &str = "Error occurred. Connection closed.";

struct LiveSession<C> {
    id: SessionId,
    connection: C,
}

/// Streaming session state machine over a [`Transport`].
pub struct SessionController<T: Transport> {
    transport: T,
    url: String,
    ids: SessionIdGen,
    live: Option<LiveSession<T::Connection>>,
    /// Most recent session, live or terminated.
    current: Option<SessionId>,
    state: SessionState,
    messages: MessageLog,
    connecting: bool,
    disposed: bool,
    tx: mpsc::UnboundedSender<TransportEvent>,
    rx: mpsc::UnboundedReceiver<TransportEvent>,
    bus: EventBus,
}

impl<T: Transport> SessionController<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            transport,
            url: url.into(),
            ids: SessionIdGen::new(),
            live: None,
            current: None,
            state: SessionState::Idle,
            messages: MessageLog::new(),
            connecting: false,
            disposed: false,
            tx,
            rx,
            bus: EventBus::default(),
        }
    }

    /// Begin a new session, releasing the previous one first.
    ///
    /// Safe in any state. Failures are never returned: they end the new
    /// session with the error entry instead.
    pub fn start(&mut self) {
        if self.disposed {
            warn!("start() called on a disposed session controller");
            return;
        }

        if let Some(prev) = self.release() {
            info!(session = %prev, "restarting, previous session released");
        }
        self.messages.clear();

        let id = self.ids.next_id();
        self.current = Some(id);
        self.connecting = true;
        self.bus.publish(ControllerEvent::SessionStarted(id));
        self.set_state(id, SessionState::Connecting);
        info!(session = %id, url = %self.url, "starting session");

        let sink = EventSink::new(id, self.tx.clone());
        match self.transport.open(&self.url, sink) {
            Ok(connection) => self.live = Some(LiveSession { id, connection }),
            Err(err) => self.fail(id, err),
        }
    }

    /// Apply one transport event. Returns `false` if it was stale and
    /// therefore ignored.
    pub fn handle(&mut self, event: TransportEvent) -> bool {
        let live = self.live.as_ref().map(|s| s.id);
        if self.disposed || live != Some(event.session) {
            debug!(
                session = %event.session,
                live = ?live,
                "ignoring event from inactive session"
            );
            return false;
        }

        let id = event.session;
        match event.kind {
            TransportEventKind::Opened => self.on_open(id),
            TransportEventKind::Data(payload) if payload == FINISHED_SENTINEL => self.finish(id),
            TransportEventKind::Data(payload) => {
                debug!(session = %id, len = payload.len(), "message received");
                self.append(id, payload);
            }
            TransportEventKind::Error(err) => self.fail(id, err),
        }
        true
    }

    /// Apply every event already queued, without waiting. Returns how many
    /// were applied (stale events are not counted).
    pub fn dispatch_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            if self.handle(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next transport event of any session.
    pub async fn next_event(&mut self) -> Option<TransportEvent> {
        self.rx.recv().await
    }

    /// Apply events as they arrive until the live session terminates.
    /// Returns at once if no session is active.
    pub async fn run_session(&mut self) {
        while self.is_active() {
            match self.rx.recv().await {
                Some(event) => {
                    self.handle(event);
                }
                None => break,
            }
        }
    }

    /// Release the live connection, if any, and ignore everything after.
    /// Calling it again has no effect.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.connecting = false;
        if let Some(id) = self.release() {
            info!(session = %id, "controller disposed, session released");
            self.set_state(id, SessionState::Terminated);
        }
        self.bus.publish(ControllerEvent::Disposed);
    }

    pub fn messages(&self) -> &[String] {
        self.messages.as_slice()
    }

    pub fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Id of the live session, if one holds a connection.
    pub fn session_id(&self) -> Option<SessionId> {
        self.live.as_ref().map(|s| s.id)
    }

    /// Id of the most recent session, live or not.
    pub fn last_session_id(&self) -> Option<SessionId> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.live.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ControllerEvent> {
        self.bus.subscribe()
    }

    fn on_open(&mut self, id: SessionId) {
        if self.state != SessionState::Connecting {
            debug!(session = %id, state = ?self.state, "duplicate open ignored");
            return;
        }
        info!(session = %id, "connection opened");
        self.connecting = false;
        self.set_state(id, SessionState::Open);
        self.append(id, OPENED_ENTRY);
    }

    fn finish(&mut self, id: SessionId) {
        info!(session = %id, messages = self.messages.len(), "processing finished");
        self.connecting = false;
        self.append(id, FINISHED_ENTRY);
        self.release();
        self.set_state(id, SessionState::Terminated);
    }

    fn fail(&mut self, id: SessionId, err: TransportError) {
        warn!(session = %id, error = %err, "session failed");
        self.connecting = false;
        self.append(id, ERROR_ENTRY);
        self.release();
        self.set_state(id, SessionState::Terminated);
    }

    fn append(&mut self, session: SessionId, text: impl Into<String>) {
        let text = text.into();
        self.messages.push(text.clone());
        self.bus.publish(ControllerEvent::MessageAppended { session, text });
    }

    fn set_state(&mut self, session: SessionId, state: SessionState) {
        self.state = state;
        self.bus.publish(ControllerEvent::StateChanged { session, state });
    }

    /// Close and forget the live connection. Returns its session id, or
    /// `None` if nothing was live.
    fn release(&mut self) -> Option<SessionId> {
        let mut live = self.live.take()?;
        live.connection.close();
        debug!(session = %live.id, "connection released");
        Some(live.id)
    }
}

impl<T: Transport> Drop for SessionController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
