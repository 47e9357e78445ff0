//! reqwest-backed event-source transport.
//!
//! Each connection runs in its own tokio task: `GET` the endpoint, check that
//! it really is an event stream, then report every message event through the
//! session's sink. Closing cancels the task.

use std::time::Duration;

use procstream_common::{new_correlation_id, TransportError};
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, warn, Instrument};

use crate::sse::parse_sse_stream;
use crate::transport::{Connection, EventSink, Transport};

const EVENT_STREAM: &str = "text/event-stream";

/// Opens event-stream connections over HTTP.
pub struct HttpEventSource {
    http: reqwest::Client,
}

impl HttpEventSource {
    /// No overall request timeout is set: a stream may stay open for as
    /// long as the server keeps it open.
    pub fn new(connect_timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpEventSource {
    type Connection = HttpConnection;

    fn open(&mut self, url: &str, sink: EventSink) -> Result<HttpConnection, TransportError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;

        let request = self
            .http
            .get(url)
            .header(ACCEPT, EVENT_STREAM)
            .header(CACHE_CONTROL, "no-cache");

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let span = info_span!(
            "event_stream",
            session = %sink.session(),
            cid = %new_correlation_id(),
        );

        runtime.spawn(
            async move {
                tokio::select! {
                    biased;
                    _ = task_cancel.cancelled() => debug!("connection cancelled"),
                    _ = stream_events(request, &sink) => {}
                }
            }
            .instrument(span),
        );

        Ok(HttpConnection { cancel })
    }
}

/// Handle to one running connection task.
#[derive(Debug)]
pub struct HttpConnection {
    cancel: CancellationToken,
}

impl Connection for HttpConnection {
    fn close(&mut self) {
        self.cancel.cancel();
    }

    fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for HttpConnection {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn stream_events(request: reqwest::RequestBuilder, sink: &EventSink) {
    let outcome = match request.send().await {
        Ok(response) => read_stream(response, sink).await,
        Err(e) => Err(TransportError::Connect(e.to_string())),
    };
    if let Err(err) = outcome {
        warn!(error = %err, "event stream failed");
        sink.error(err);
    }
}

/// Only returns `Err`: a stream that ends without the controller closing it
/// is reported as [`TransportError::StreamEnded`].
async fn read_stream(response: reqwest::Response, sink: &EventSink) -> Result<(), TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !is_event_stream(&content_type) {
        return Err(TransportError::ContentType(content_type));
    }

    debug!(status = status.as_u16(), "stream opened");
    sink.opened();

    parse_sse_stream(response, |event| {
        if event.is_message() {
            sink.data(event.data);
        } else {
            debug!(event = ?event.event, "skipping named event");
        }
    })
    .await?;

    Err(TransportError::StreamEnded)
}

fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(EVENT_STREAM))
}
