//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Position and player shared by every roster command
#[derive(Debug, Clone, Args)]
pub struct PlayerTarget {
    /// Position label, matched exactly (e.g. QB, WR, RB).
    #[clap(long, short)]
    pub position: String,

    /// Player name, matched exactly.
    #[clap(long, short = 'n')]
    pub player: String,
}

#[derive(Debug, Parser)]
#[clap(name = "depth-chart", about = "Player depth chart manager")]
pub struct DepthChartCli {
    /// Base URL of the depth chart API (or set `DEPTH_CHART_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Work on a local SQLite chart instead of the API (or set `DEPTH_CHART_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Work on the local chart in the user data directory when no `--db` is given.
    #[clap(long, global = true)]
    pub local: bool,

    /// Log requests and store operations at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full depth chart.
    Show {
        /// Output the chart as JSON instead of ranked lists.
        #[clap(long)]
        json: bool,
    },

    /// Add a player to a position's depth chart.
    ///
    /// Without `--depth` the player is appended as the lowest-ranked backup.
    Add {
        #[clap(flatten)]
        target: PlayerTarget,

        /// Zero-based rank (0 = starter). Values past the end append.
        #[clap(long, short)]
        depth: Option<usize>,
    },

    /// Remove a player from a position's depth chart.
    Remove {
        #[clap(flatten)]
        target: PlayerTarget,
    },

    /// List the players ranked below a player at a position.
    Backups {
        #[clap(flatten)]
        target: PlayerTarget,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_depth() {
        let cli = DepthChartCli::parse_from([
            "depth-chart",
            "add",
            "-p",
            "QB",
            "-n",
            "Mac Jones",
            "--depth",
            "0",
        ]);

        match cli.command {
            Commands::Add { target, depth } => {
                assert_eq!(target.position, "QB");
                assert_eq!(target.player, "Mac Jones");
                assert_eq!(depth, Some(0));
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = DepthChartCli::parse_from([
            "depth-chart",
            "show",
            "--db",
            "/tmp/chart.db",
            "--verbose",
        ]);

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/chart.db")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show { json: false }));
    }

    #[test]
    fn test_parse_local_flag() {
        let cli = DepthChartCli::parse_from(["depth-chart", "--local", "backups", "-p", "QB", "-n", "A"]);
        assert!(cli.local);
        assert!(cli.db.is_none());

        let cli = DepthChartCli::parse_from(["depth-chart", "show"]);
        assert!(!cli.local);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let result = DepthChartCli::try_parse_from([
            "depth-chart",
            "add",
            "-p",
            "QB",
            "-n",
            "A",
            "--depth",
            "-1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_backups_requires_player() {
        let result = DepthChartCli::try_parse_from(["depth-chart", "backups", "-p", "QB"]);
        assert!(result.is_err());
    }
}
