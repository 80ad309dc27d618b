use crate::analysis::WeekdayOrder;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghpulse")]
#[command(about = "Analyze GitHub commit activity by hour, weekday, and message")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true, help = "GitHub personal access token")]
    pub token: Option<String>,

    #[arg(long, env = "GHPULSE_API_URL", global = true, help = "GitHub API base URL [default: https://api.github.com]")]
    pub api_url: Option<String>,

    #[arg(long, value_name = "SECS", global = true, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Suppress logs and progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the commit history and print summary statistics.
    Analyze {
        #[arg(help = "Repository as owner/repo or https://github.com/owner/repo")]
        repo: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, value_enum, default_value_t = WeekdayOrder::Canonical, help = "Ordering of the weekday table")]
        weekday_order: WeekdayOrder,
    },
    /// Print one analyzed row per commit.
    Export {
        #[arg(help = "Repository as owner/repo or https://github.com/owner/repo")]
        repo: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON", conflicts_with = "json")]
        ndjson: bool,
    },
    /// Interactive terminal dashboard.
    #[command(alias = "tui", alias = "ui")]
    Dashboard {
        #[arg(help = "Repository as owner/repo or https://github.com/owner/repo")]
        repo: String,

        #[arg(long, value_enum, default_value_t = WeekdayOrder::Canonical, help = "Initial ordering of the weekday chart")]
        weekday_order: WeekdayOrder,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze { repo, json, weekday_order } => {
                crate::logging::init(self.common.verbose, self.common.quiet);
                crate::commands::analyze::exec(&self.common, repo, json, weekday_order)
            }
            Commands::Export { repo, json, ndjson } => {
                crate::logging::init(self.common.verbose, self.common.quiet);
                crate::commands::export::exec(&self.common, repo, json, ndjson)
            }
            Commands::Dashboard { repo, weekday_order } => {
                // Log lines written to stderr would tear the alternate screen.
                crate::logging::init(0, true);
                crate::commands::dashboard::exec(&self.common, repo, weekday_order)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ghpulse", "analyze", "o/r", "--json", "--token", "abc", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.common.token.as_deref(), Some("abc"));
        assert_eq!(cli.common.verbose, 2);
        match cli.command {
            Commands::Analyze { repo, json, weekday_order } => {
                assert_eq!(repo, "o/r");
                assert!(json);
                assert_eq!(weekday_order, WeekdayOrder::Canonical);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn parses_weekday_order_values() {
        let cli = Cli::try_parse_from(["ghpulse", "dashboard", "o/r", "--weekday-order", "by-count"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dashboard { weekday_order: WeekdayOrder::ByCount, .. }
        ));
    }

    #[test]
    fn export_formats_conflict() {
        assert!(Cli::try_parse_from(["ghpulse", "export", "o/r", "--json", "--ndjson"]).is_err());
    }
}
