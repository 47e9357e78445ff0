use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// procstream: follow a server-sent-events processing stream from the terminal.
#[derive(Parser, Debug)]
#[command(name = "procstream", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `procstream=debug`). Takes precedence over RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start streaming sessions and print their messages (default).
    Run(RunArgs),

    /// Inspect or create the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Endpoint URL, overriding `[endpoint] url`.
    #[arg(long)]
    pub url: Option<String>,

    /// Number of sessions to run one after another.
    #[arg(short = 'n', long)]
    pub sessions: Option<u32>,

    /// Do not print the connecting status line.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the commented default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as JSON.
    Show,
    /// Print the default config file location.
    Path,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn about_text_is_plain_ascii() {
        let about = Args::command()
            .get_about()
            .map(|a| a.to_string())
            .unwrap_or_default();
        assert_eq!(
            about,
            "procstream: follow a server-sent-events processing stream from the terminal."
        );
        assert!(about.is_ascii());
    }

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::try_parse_from(["procstream"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn run_flags() {
        let args = Args::try_parse_from([
            "procstream",
            "run",
            "--url",
            "http://127.0.0.1:9000/api/process",
            "-n",
            "3",
            "--quiet",
        ])
        .unwrap();
        match args.command {
            Some(Command::Run(run)) => {
                assert_eq!(run.url.as_deref(), Some("http://127.0.0.1:9000/api/process"));
                assert_eq!(run.sessions, Some(3));
                assert!(run.quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "procstream",
            "config",
            "show",
            "--config",
            "/tmp/p.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Some(Command::Config(ConfigCommand::Show))));
    }

    #[test]
    fn config_init_force() {
        let args = Args::try_parse_from(["procstream", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Config(ConfigCommand::Init { force: true }))
        ));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
