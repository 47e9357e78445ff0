//! procstream: follow a server-sent-events processing stream from the terminal.
//!
//! Opens one streaming session per round against the configured endpoint and
//! prints every log entry as it arrives. Logs go to stderr, the list to stdout.

mod cli;
mod config_cmd;
mod render;
mod run;

use std::process::ExitCode;

use procstream_common::ProcstreamError;
use procstream_config::{default_config_path, load_config};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, ConfigCommand, RunArgs};

const DEFAULT_LOG: &str = "procstream=info";

/// `--log-level` wins over `RUST_LOG`, which wins over the config file.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config_level)),
    }
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(args: Args) -> Result<(), ProcstreamError> {
    // `config init` must work when no config can be loaded yet.
    if let Some(Command::Config(ConfigCommand::Init { force })) = args.command {
        init_logging(args.log_level.as_deref(), DEFAULT_LOG);
        let path = match args.config {
            Some(path) => path,
            None => default_config_path()?,
        };
        return config_cmd::init(&path, force);
    }

    let config = load_config(args.config.as_deref())?;
    init_logging(args.log_level.as_deref(), &config.log.level);
    tracing::info!("procstream v{} starting...", env!("CARGO_PKG_VERSION"));

    match args.command {
        Some(Command::Config(ConfigCommand::Show)) => {
            config_cmd::show(&config);
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Path)) => config_cmd::path(),
        Some(Command::Config(ConfigCommand::Init { .. })) => Ok(()),
        Some(Command::Run(run_args)) => run_sessions(&config, &run_args).await,
        None => run_sessions(&config, &RunArgs::default()).await,
    }
}

async fn run_sessions(
    config: &procstream_config::ProcstreamConfig,
    args: &RunArgs,
) -> Result<(), ProcstreamError> {
    let config = run::effective_config(config, args)?;
    tracing::info!(url = %config.endpoint.url, sessions = config.run.sessions, "running");
    run::run(&config, std::io::stdout().lock()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    match dispatch(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("procstream: {e}");
            ExitCode::FAILURE
        }
    }
}
