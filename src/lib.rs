//! Fantasy League Recap Library
//!
//! Pulls an ESPN fantasy football league's season into a small relational
//! store, persists it as a pipe-delimited snapshot, and runs a fixed set of
//! recap queries over it.
//!
//! ## Features
//!
//! - **Ingestion**: teams, the full transaction feed and weekly box scores
//! - **Snapshots**: one `|`-delimited file per table, reloadable for analysis
//! - **Recap Queries**: projection differentials, points for/against, closest
//!   games, weekly-median luck, bench points, lineup misses, roster moves,
//!   injuries and schedule-swap records
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use league_recap::storage::import_snapshot;
//!
//! # fn example() -> league_recap::Result<()> {
//! let db = import_snapshot(std::path::Path::new("data"))?;
//! db.check_consistency()?;
//!
//! for total in db.points_for()? {
//!     println!("{}: {:.2}", total.team, total.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every command:
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_FFL_SEASON=2024
//! ```
//! Variables in a `.env` file in the working directory are loaded too.
//! Private leagues also need the `ESPN_SWID` and `ESPN_S2` session cookies.

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, LineupSlot, PlayerId, Position, Season, TeamId, Week};
pub use error::{RecapError, Result};
pub use storage::{LeagueDatabase, LeagueReport};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
pub const SEASON_ENV_VAR: &str = "ESPN_FFL_SEASON";
