//! CLI command definitions for the `fitcoach` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the REST API;
//! `ask` and `index` drive the same pipeline and indexer directly.

pub mod ask;
pub mod index;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use fitcoach_types::activity::ActivityKind;

/// Personalised fitness coaching backed by your own workout and meal log.
#[derive(Parser)]
#[command(name = "fitcoach", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $FITCOACH_CONFIG, then ./fitcoach.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log line format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Export spans through OpenTelemetry to stdout.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Address to bind, overriding `[server].bind`.
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Ask the coach one question and print the answer.
    Ask {
        /// User whose stored activities personalise the answer.
        #[arg(long = "user", value_name = "ID")]
        user_id: String,

        /// The question.
        message: String,
    },

    /// Index one workout or meal.
    Index {
        /// Owner of the activity.
        #[arg(long = "user", value_name = "ID")]
        user_id: String,

        /// Activity type (workout, meal).
        #[arg(long = "type", value_name = "TYPE")]
        kind: ActivityKind,

        /// Free-text description.
        #[arg(long)]
        notes: String,

        #[arg(long)]
        calories: Option<f64>,

        /// Duration in minutes.
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
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
    fn test_parse_index_command() {
        let cli = Cli::try_parse_from([
            "fitcoach", "index", "--user", "u1", "--type", "meal", "--notes", "Oats", "--calories",
            "350",
        ])
        .unwrap();

        match cli.command {
            Commands::Index {
                user_id,
                kind,
                calories,
                duration,
                ..
            } => {
                assert_eq!(user_id, "u1");
                assert_eq!(kind, ActivityKind::Meal);
                assert_eq!(calories, Some(350.0));
                assert_eq!(duration, None);
            }
            _ => panic!("expected index command"),
        }
    }

    #[test]
    fn test_unknown_activity_type_is_rejected() {
        let result = Cli::try_parse_from([
            "fitcoach", "index", "--user", "u1", "--type", "nap", "--notes", "zzz",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fitcoach", "ask", "--user", "u1", "hello", "-vv", "--json", "--config", "coach.toml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("coach.toml")));
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_log_format_json() {
        let cli = Cli::try_parse_from(["fitcoach", "--log-format", "json", "serve"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);

        let bad = Cli::try_parse_from(["fitcoach", "--log-format", "xml", "serve"]);
        assert!(bad.is_err());
    }
}
