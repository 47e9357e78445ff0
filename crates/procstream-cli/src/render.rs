//! Terminal rendering of controller updates as a numbered list.

use std::io::{self, Write};

use procstream_common::{ControllerEvent, SessionState};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::warn;

pub struct ListView<W: Write> {
    out: W,
    show_status: bool,
    /// Entries printed for the current session.
    count: usize,
}

impl<W: Write> ListView<W> {
    pub fn new(out: W, show_status: bool) -> Self {
        Self {
            out,
            show_status,
            count: 0,
        }
    }

    /// Render every update already queued on `rx`.
    pub fn drain(&mut self, rx: &mut broadcast::Receiver<ControllerEvent>) -> io::Result<()> {
        loop {
            match rx.try_recv() {
                Ok(event) => self.render(&event)?,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "display fell behind, updates dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        self.out.flush()
    }

    pub fn render(&mut self, event: &ControllerEvent) -> io::Result<()> {
        match event {
            ControllerEvent::SessionStarted(id) => {
                self.count = 0;
                writeln!(self.out, "Session {id}")?;
            }
            ControllerEvent::StateChanged {
                state: SessionState::Connecting,
                ..
            } if self.show_status => {
                writeln!(self.out, "Connecting...")?;
            }
            ControllerEvent::MessageAppended { text, .. } => {
                self.count += 1;
                writeln!(self.out, "{:>3}. {text}", self.count)?;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
