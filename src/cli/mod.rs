//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season, Week};

/// Default snapshot directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Parser)]
#[clap(
    name = "league-recap",
    about = "Fantasy league season recap: ingest ESPN results and run the recap queries"
)]
pub struct Recap {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch teams, transactions and weekly box scores and write a snapshot.
    ///
    /// Private leagues need `ESPN_SWID` and `ESPN_S2` set.
    Ingest {
        /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year, e.g. 2025 (or set `ESPN_FFL_SEASON` env var; defaults
        /// to 2025).
        #[clap(long, short)]
        season: Option<Season>,

        /// Ingest weeks 1 through this week (inclusive). Defaults to the last
        /// completed matchup period reported by ESPN.
        #[clap(long)]
        through_week: Option<Week>,

        /// Directory the snapshot tables are written to.
        #[clap(long, short, default_value = DEFAULT_DATA_DIR)]
        out: PathBuf,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Load a snapshot and print the season recap tables.
    Analyze {
        /// Directory holding a snapshot written by `ingest`.
        #[clap(long, short, default_value = DEFAULT_DATA_DIR)]
        data: PathBuf,

        /// Output the full report as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },
}
