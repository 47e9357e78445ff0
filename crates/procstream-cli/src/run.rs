//! The `run` command: drive the session controller against the endpoint.

use std::io::Write;
use std::time::Duration;

use procstream_common::ProcstreamError;
use procstream_config::{validation, ProcstreamConfig};
use procstream_session::{HttpEventSource, SessionController};
use tracing::info;

use crate::cli::RunArgs;
use crate::render::ListView;

/// Apply command-line overrides and validate the result.
pub fn effective_config(
    config: &ProcstreamConfig,
    args: &RunArgs,
) -> Result<ProcstreamConfig, ProcstreamError> {
    let mut config = config.clone();
    if let Some(ref url) = args.url {
        config.endpoint.url = url.clone();
    }
    if let Some(sessions) = args.sessions {
        config.run.sessions = sessions;
    }
    if args.quiet {
        config.run.show_status = false;
    }
    validation::validate(&config)?;
    Ok(config)
}

/// Run the configured number of sessions back to back, rendering into `out`.
/// Ctrl-C disposes the controller and returns early.
pub async fn run<W: Write>(config: &ProcstreamConfig, out: W) -> Result<(), ProcstreamError> {
    let transport = HttpEventSource::new(Duration::from_secs(u64::from(
        config.endpoint.connect_timeout_secs,
    )))?;
    let mut controller = SessionController::new(transport, config.endpoint.url.as_str());
    let mut updates = controller.subscribe();
    let mut view = ListView::new(out, config.run.show_status);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    for round in 1..=config.run.sessions {
        info!(round, total = config.run.sessions, "starting session");
        controller.start();
        view.drain(&mut updates)?;

        while controller.is_active() {
            tokio::select! {
                event = controller.next_event() => {
                    let Some(event) = event else { break };
                    controller.handle(event);
                    view.drain(&mut updates)?;
                }
                _ = &mut shutdown => {
                    info!("interrupted, closing connection");
                    controller.dispose();
                    view.drain(&mut updates)?;
                    return Ok(());
                }
            }
        }
    }

    controller.dispose();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let args = RunArgs {
            url: Some("https://example.com/api/process".into()),
            sessions: Some(4),
            quiet: true,
        };
        let config = effective_config(&ProcstreamConfig::default(), &args).unwrap();
        assert_eq!(config.endpoint.url, "https://example.com/api/process");
        assert_eq!(config.run.sessions, 4);
        assert!(!config.run.show_status);
    }

    #[test]
    fn no_overrides_keep_config() {
        let config =
            effective_config(&ProcstreamConfig::default(), &RunArgs::default()).unwrap();
        assert_eq!(config, ProcstreamConfig::default());
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = RunArgs {
            url: Some("localhost:8080".into()),
            ..RunArgs::default()
        };
        let err = effective_config(&ProcstreamConfig::default(), &args).unwrap_err();
        assert!(matches!(err, ProcstreamError::Config(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_prints_error_entry() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let args = RunArgs {
            url: Some(format!("http://{addr}/api/process")),
            sessions: Some(2),
            quiet: true,
        };
        let config = effective_config(&ProcstreamConfig::default(), &args).unwrap();

        let mut out = Vec::new();
        tokio::time::timeout(Duration::from_secs(10), run(&config, &mut out))
            .await
            .expect("run did not finish")
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Session #1\n  1. Error occurred. Connection closed.\n\
             Session #2\n  1. Error occurred. Connection closed.\n"
        );
    }
}
