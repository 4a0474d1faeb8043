//! Database schema and connection management

use crate::Result;
use rusqlite::Connection;

/// Tables in dependency order, as written to and read from a snapshot.
pub const TABLES: [&str; 6] = [
    "team",
    "player",
    "match",
    "match_team",
    "player_performance",
    "activity",
];

/// Connection to the league store.
///
/// The store lives in memory for the duration of one command; the snapshot
/// directory is the durable copy. Dropping the handle closes the connection.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open an empty in-memory store with the league schema.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            r#"CREATE TABLE IF NOT EXISTS team (
                id   INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS player (
                id   INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS activity (
                team_id   INTEGER NOT NULL,
                action    TEXT NOT NULL,
                player_id INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS "match" (
                week         INTEGER NOT NULL,
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                CHECK (home_team_id <> away_team_id)
            );

            CREATE TABLE IF NOT EXISTS match_team (
                week            INTEGER NOT NULL,
                team_id         INTEGER NOT NULL,
                actual_score    REAL NOT NULL,
                projected_score REAL NOT NULL,
                PRIMARY KEY (week, team_id)
            );

            CREATE TABLE IF NOT EXISTS player_performance (
                week             INTEGER NOT NULL,
                player_id        INTEGER NOT NULL,
                team_id          INTEGER NOT NULL,
                position         TEXT NOT NULL,
                benched          INTEGER NOT NULL,
                injured          INTEGER NOT NULL,
                actual_points    REAL NOT NULL,
                projected_points REAL NOT NULL,
                PRIMARY KEY (week, player_id)
            );

            CREATE INDEX IF NOT EXISTS idx_match_week ON "match"(week);
            CREATE INDEX IF NOT EXISTS idx_performance_team_week
                ON player_performance(team_id, week);"#,
        )?;

        Ok(())
    }
}
