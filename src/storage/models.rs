//! Data models for the storage layer

use crate::cli::types::{PlayerId, TeamId, Week};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One league franchise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// An athlete that appeared in at least one lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// A scheduled head-to-head matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub week: Week,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
}

/// One side of a matchup's box score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub week: Week,
    pub team_id: TeamId,
    pub actual_score: f64,
    pub projected_score: f64,
}

/// A player's line for one week on one roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub week: Week,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub position: String,
    pub benched: bool,
    pub injured: bool,
    pub actual_points: f64,
    pub projected_points: f64,
}

/// A roster transaction (add, drop, trade)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub team_id: TeamId,
    pub action: String,
    pub player_id: PlayerId,
}

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
    pub match_teams: usize,
    pub player_performances: usize,
    pub activities: usize,
}

/// A team's weekly result against its projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPerformance {
    pub team: String,
    pub week: Week,
    pub differential: f64,
}

/// A team with an aggregate score or count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTotal<T> {
    pub team: String,
    pub value: T,
}

/// Margin of a single game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameMargin {
    pub week: Week,
    pub home_team: String,
    pub home_score: f64,
    pub away_team: String,
    pub away_score: f64,
    pub differential: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LuckTag {
    #[serde(rename = "LOSS")]
    Loss,
    #[serde(rename = "WIN")]
    Win,
}

impl fmt::Display for LuckTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuckTag::Loss => write!(f, "LOSS"),
            LuckTag::Win => write!(f, "WIN"),
        }
    }
}

/// A win scored below the weekly median, or a loss scored above it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckResult {
    pub tag: LuckTag,
    pub team: String,
    pub week: Week,
    pub score: f64,
    pub median: f64,
    pub median_diff: f64,
}

/// Points left on a bench
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchPerformance {
    pub team: String,
    pub player: String,
    pub week: Week,
    pub points: f64,
}

/// Wins a team would have had playing another team's schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSwap {
    pub team: String,
    pub schedule_of: String,
    pub wins: u32,
}
