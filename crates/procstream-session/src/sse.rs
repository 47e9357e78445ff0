//! Server-Sent Events (SSE) stream decoding.
//!
//! The processing endpoint speaks the plain event-stream format: one
//! `data:` line per step, a blank line after each event. [`SseDecoder`]
//! turns lines into events; [`parse_sse_stream`] drives it over a reqwest
//! response body.

use futures_util::StreamExt;
use procstream_common::TransportError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;
use tracing::trace;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The `event:` field, if the server set one.
    pub event: Option<String>,
    /// The event data; multiple `data:` lines are joined with `\n`.
    pub data: String,
    /// The last `id:` seen on the stream so far.
    pub id: Option<String>,
}

impl SseEvent {
    /// Whether this event reaches a plain message handler. Events with a
    /// custom type only go to listeners registered for that type.
    pub fn is_message(&self) -> bool {
        matches!(self.event.as_deref(), None | Some("message"))
    }
}

/// Line-oriented event-stream decoder.
#[derive(Debug, Default)]
pub struct SseDecoder {
    event: Option<String>,
    data: String,
    has_data: bool,
    last_id: Option<String>,
    started: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator). Returns an event when the
    /// line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let mut line = line.strip_suffix('\r').unwrap_or(line);
        if !self.started {
            self.started = true;
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }

        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => {
                if self.has_data {
                    self.data.push('\n');
                }
                self.data.push_str(value);
                self.has_data = true;
            }
            "id" if !value.contains('\0') => self.last_id = Some(value.to_string()),
            "retry" => trace!(retry = value, "ignoring retry field"),
            _ => {}
        }
        None
    }

    /// Flush an event left unterminated at end of stream.
    pub fn finish(&mut self) -> Option<SseEvent> {
        self.dispatch()
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event = self.event.take();
        if !self.has_data {
            return None;
        }
        self.has_data = false;
        Some(SseEvent {
            event: event.filter(|e| !e.is_empty()),
            data: std::mem::take(&mut self.data),
            id: self.last_id.clone(),
        })
    }
}

/// Splits raw bytes into lines ending in `\r\n`, `\n` or a lone `\r`.
///
/// Bytes are held until their line is complete, so a UTF-8 sequence or a
/// `\r\n` pair split across chunks still decodes as one line.
#[derive(Debug, Default)]
struct LineSplitter {
    buf: Vec<u8>,
    /// Last chunk ended in `\r`: a leading `\n` in the next one is its pair.
    after_cr: bool,
}

impl LineSplitter {
    fn push(&mut self, mut chunk: &[u8]) -> Vec<String> {
        if self.after_cr && !chunk.is_empty() {
            self.after_cr = false;
            chunk = chunk.strip_prefix(b"\n").unwrap_or(chunk);
        }

        let mut lines = Vec::new();
        while let Some(pos) = chunk.iter().position(|&b| b == b'\n' || b == b'\r') {
            self.buf.extend_from_slice(&chunk[..pos]);
            lines.push(String::from_utf8_lossy(&self.buf).into_owned());
            self.buf.clear();

            let ended_with_cr = chunk[pos] == b'\r';
            chunk = &chunk[pos + 1..];
            if ended_with_cr {
                match chunk.first() {
                    Some(b'\n') => chunk = &chunk[1..],
                    None => self.after_cr = true,
                    Some(_) => {}
                }
            }
        }
        self.buf.extend_from_slice(chunk);
        lines
    }

    /// The final line, if the stream did not end with a terminator.
    fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        Some(line)
    }
}

/// Decode every event from a buffered reader, calling `on_event` for each.
pub async fn decode_events<R>(
    mut reader: R,
    mut on_event: impl FnMut(SseEvent),
) -> Result<(), TransportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut splitter = LineSplitter::default();
    let mut decoder = SseDecoder::new();

    loop {
        let chunk = reader
            .fill_buf()
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;
        if chunk.is_empty() {
            break;
        }
        let consumed = chunk.len();
        for line in splitter.push(chunk) {
            if let Some(event) = decoder.push_line(&line) {
                on_event(event);
            }
        }
        reader.consume(consumed);
    }

    let tail = splitter.finish().and_then(|line| decoder.push_line(&line));
    if let Some(event) = tail.or_else(|| decoder.finish()) {
        on_event(event);
    }

    Ok(())
}

/// Parse an SSE stream from a reqwest response, calling `on_event` for each event.
pub async fn parse_sse_stream(
    response: reqwest::Response,
    on_event: impl FnMut(SseEvent),
) -> Result<(), TransportError> {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let reader = tokio::io::BufReader::new(StreamReader::new(byte_stream));
    decode_events(reader, on_event).await
}
