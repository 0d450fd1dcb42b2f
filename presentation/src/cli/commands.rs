//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for debate transcripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted transcript with every round
    #[default]
    Full,
    /// The session exactly as the HTTP API returns it
    Json,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored when attached to a terminal
    Pretty,
    /// One JSON object per line
    Json,
}

/// CLI arguments for debate-mediator
#[derive(Parser, Debug)]
#[command(name = "debate-mediator")]
#[command(author, version, about = "Mediator for two-party debates between generation workers")]
#[command(long_about = r#"
Debate Mediator runs a structured debate between two generation workers:
one argues for the topic, the other against it.

Each round, the supporting worker speaks first and the opposing worker
replies. Every argument is appended to a shared context that both workers
see on their next turn.

Configuration files are loaded from (in priority order):
1. Environment          AGENT_PRO_URL, AGENT_CON_URL, DEBATE_<SECTION>__<KEY>
2. --config <path>      Explicit config file
3. ./mediator.toml      Project-level config
4. ~/.config/debate-mediator/config.toml   Global config

Example:
  debate-mediator serve --port 5000
  debate-mediator run "Remote work should be the default" --rounds 3
  debate-mediator run "Nuclear power is green" -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format (overrides logging.format)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP mediator (default when no command is given)
    Serve(ServeArgs),
    /// Run a single debate and print the transcript
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// The proposition to debate
    pub topic: String,

    /// Background text both workers see before the first argument
    #[arg(short, long, default_value = "")]
    pub context: String,

    /// Number of rounds (one supporting and one opposing argument each)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub rounds: i64,

    /// Overall session deadline in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["debate-mediator"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["debate-mediator", "serve", "--host", "127.0.0.1", "-p", "8080"])
                .unwrap();
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_arguments() {
        let cli = Cli::try_parse_from([
            "debate-mediator",
            "run",
            "Cats are better than dogs",
            "--rounds",
            "3",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Run(args)) => {
                assert_eq!(args.topic, "Cats are better than dogs");
                assert_eq!(args.rounds, 3);
                assert_eq!(args.context, "");
                assert_eq!(args.output, OutputFormat::Json);
                assert!(args.timeout.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_rounds_reach_validation() {
        let cli = Cli::try_parse_from(["debate-mediator", "run", "topic", "--rounds", "-1"])
            .unwrap();
        match cli.command {
            Some(Command::Run(args)) => assert_eq!(args.rounds, -1),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "debate-mediator",
            "serve",
            "--log-format",
            "json",
            "--no-config",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(cli.no_config);
    }
}
