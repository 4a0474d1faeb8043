//! Snapshot export and import.
//!
//! A snapshot is a directory with one pipe-delimited file per table
//! (`team.csv`, `match_team.csv`, ...). Each file starts with a header row
//! naming the columns; booleans are written as `true`/`false`. Field text is
//! read back verbatim, only header names are trimmed.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::{models::*, schema::LeagueDatabase};
use crate::{RecapError, Result};

pub const SNAPSHOT_DELIMITER: u8 = b'|';

/// A model stored as one snapshot table.
pub trait SnapshotRow: Serialize + DeserializeOwned {
    const TABLE: &'static str;
    /// Column names, in field order.
    const COLUMNS: &'static [&'static str];
}

impl SnapshotRow for Team {
    const TABLE: &'static str = "team";
    const COLUMNS: &'static [&'static str] = &["id", "name"];
}

impl SnapshotRow for Player {
    const TABLE: &'static str = "player";
    const COLUMNS: &'static [&'static str] = &["id", "name"];
}

impl SnapshotRow for Match {
    const TABLE: &'static str = "match";
    const COLUMNS: &'static [&'static str] = &["week", "home_team_id", "away_team_id"];
}

impl SnapshotRow for MatchTeam {
    const TABLE: &'static str = "match_team";
    const COLUMNS: &'static [&'static str] =
        &["week", "team_id", "actual_score", "projected_score"];
}

impl SnapshotRow for PlayerPerformance {
    const TABLE: &'static str = "player_performance";
    const COLUMNS: &'static [&'static str] = &[
        "week",
        "player_id",
        "team_id",
        "position",
        "benched",
        "injured",
        "actual_points",
        "projected_points",
    ];
}

impl SnapshotRow for Activity {
    const TABLE: &'static str = "activity";
    const COLUMNS: &'static [&'static str] = &["team_id", "action", "player_id"];
}

/// Path of `table` inside a snapshot directory.
pub fn table_path(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{}.csv", table))
}

fn write_table<T: SnapshotRow>(dir: &Path, rows: &[T]) -> Result<()> {
    let path = table_path(dir, T::TABLE);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(SNAPSHOT_DELIMITER)
        .has_headers(false)
        .from_path(&path)
        .map_err(|e| RecapError::csv(T::TABLE, e))?;

    // Written by hand so empty tables still carry their header.
    writer
        .write_record(T::COLUMNS)
        .map_err(|e| RecapError::csv(T::TABLE, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| RecapError::csv(T::TABLE, e))?;
    }
    writer.flush()?;

    debug!(table = T::TABLE, rows = rows.len(), path = %path.display(), "table exported");
    Ok(())
}

fn read_table<T: SnapshotRow>(dir: &Path) -> Result<Vec<T>> {
    let path = table_path(dir, T::TABLE);
    if !path.is_file() {
        return Err(RecapError::MissingTable {
            table: T::TABLE.to_string(),
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(SNAPSHOT_DELIMITER)
        .trim(csv::Trim::Headers)
        .from_path(&path)
        .map_err(|e| RecapError::csv(T::TABLE, e))?;

    let headers = reader
        .headers()
        .map_err(|e| RecapError::csv(T::TABLE, e))?
        .clone();
    if let Some(missing) = T::COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(RecapError::MissingColumn {
            table: T::TABLE.to_string(),
            column: missing.to_string(),
        });
    }

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.map_err(|e| RecapError::csv(T::TABLE, e))?);
    }
    Ok(rows)
}

/// Write every table of `db` into `dir`, creating the directory if needed.
pub fn export_snapshot(db: &LeagueDatabase, dir: &Path) -> Result<TableCounts> {
    fs::create_dir_all(dir)?;

    write_table(dir, &db.teams()?)?;
    write_table(dir, &db.players()?)?;
    write_table(dir, &db.matches()?)?;
    write_table(dir, &db.match_teams()?)?;
    write_table(dir, &db.player_performances()?)?;
    write_table(dir, &db.activities()?)?;

    let counts = db.counts()?;
    info!(dir = %dir.display(), ?counts, "snapshot exported");
    Ok(counts)
}

/// Load a snapshot written by [`export_snapshot`] into a fresh in-memory store.
pub fn import_snapshot(dir: &Path) -> Result<LeagueDatabase> {
    let teams: Vec<Team> = read_table(dir)?;
    let players: Vec<Player> = read_table(dir)?;
    let matches: Vec<Match> = read_table(dir)?;
    let match_teams: Vec<MatchTeam> = read_table(dir)?;
    let performances: Vec<PlayerPerformance> = read_table(dir)?;
    let activities: Vec<Activity> = read_table(dir)?;

    let mut db = LeagueDatabase::new_in_memory()?;
    for team in &teams {
        db.insert_team(team)?;
    }
    for player in &players {
        db.upsert_player(player)?;
    }
    for matchup in &matches {
        db.insert_match_row(matchup)?;
    }
    for side in &match_teams {
        db.insert_match_team(side)?;
    }
    for perf in &performances {
        db.insert_player_performance(perf)?;
    }
    for activity in &activities {
        db.insert_activity(activity)?;
    }

    info!(dir = %dir.display(), counts = ?db.counts()?, "snapshot loaded");
    Ok(db)
}
