//! CLI command definitions and argument parsing.

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Burns - Take the Burns Depression Checklist and track your scores over time.
#[derive(Debug, Parser)]
#[command(name = "burns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Session database path
    #[arg(long, global = true, env = "BURNS_DB")]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Log filter to use when `RUST_LOG` is not set.
    pub fn log_level<'a>(&self, config: &'a Config) -> &'a str {
        match self.verbose {
            0 => &config.settings.log_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (scores and IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the 25 checklist items and the rating scale
    Questions,

    /// Take the checklist interactively (default)
    Take,

    /// Submit 25 ratings non-interactively
    Submit(SubmitArgs),

    /// Show every recorded session, newest first
    History(HistoryArgs),

    /// Chart scores over a time range
    Trend(TrendArgs),
}

/// Arguments for the submit command.
#[derive(Debug, Parser)]
pub struct SubmitArgs {
    /// 25 ratings from 0 to 4, space or comma separated
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub responses: Vec<String>,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Maximum number of sessions to show (at least 1)
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,
}

/// Arguments for the trend command.
#[derive(Debug, Parser)]
pub struct TrendArgs {
    /// Time range to chart
    #[arg(short, long, value_enum, default_value = "all")]
    pub range: RangeArg,

    /// Start of a custom range ("YYYY-MM-DD" or "YYYY-MM-DD HH:MM:SS")
    #[arg(long)]
    pub from: Option<String>,

    /// End of a custom range ("YYYY-MM-DD" or "YYYY-MM-DD HH:MM:SS")
    #[arg(long)]
    pub to: Option<String>,

    /// Chart width in columns
    #[arg(short, long, default_value = "60")]
    pub width: usize,
}

/// Trend range argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RangeArg {
    /// Every session
    All,
    /// The last 7 days
    Week,
    /// The last 30 days
    Month,
    /// The last 365 days
    Year,
    /// Between --from and --to
    Custom,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults() {
        let cli = Cli::parse_from(["burns"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_submit_command() {
        let cli = Cli::parse_from(["burns", "submit", "0", "1", "2", "-1"]);
        match cli.command {
            Some(Command::Submit(args)) => assert_eq!(args.responses, vec!["0", "1", "2", "-1"]),
            _ => panic!("Expected Submit command"),
        }
    }

    #[test]
    fn test_trend_command() {
        let cli = Cli::parse_from([
            "burns", "trend", "--range", "custom", "--from", "2024-01-01", "--to", "2024-02-01",
        ]);
        match cli.command {
            Some(Command::Trend(args)) => {
                assert_eq!(args.range, RangeArg::Custom);
                assert_eq!(args.from.as_deref(), Some("2024-01-01"));
                assert_eq!(args.width, 60);
            }
            _ => panic!("Expected Trend command"),
        }
    }

    #[test]
    fn test_history_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["burns", "history", "--limit", "0"]).is_err());

        let cli = Cli::parse_from(["burns", "history", "-l", "3"]);
        match cli.command {
            Some(Command::History(args)) => assert_eq!(args.limit.map(NonZeroUsize::get), Some(3)),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["burns", "history", "--db", "/tmp/x.db", "-f", "json", "-vv"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_log_level_from_verbosity() {
        let config = Config::default();
        let quiet = Cli::parse_from(["burns"]);
        assert_eq!(quiet.log_level(&config), config.settings.log_level);
        let loud = Cli::parse_from(["burns", "-v"]);
        assert_eq!(loud.log_level(&config), "debug");
    }
}
