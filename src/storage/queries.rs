//! Basic insert and read operations

use super::{models::*, schema::LeagueDatabase};
use crate::{
    cli::types::{PlayerId, TeamId, Week},
    RecapError, Result,
};
use rusqlite::{params, Row};

impl LeagueDatabase {
    /// Insert a team; a second insert of the same id is a constraint error.
    pub fn insert_team(&mut self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT INTO team (id, name) VALUES (?, ?)",
            params![team.id.as_u32(), team.name],
        )?;
        Ok(())
    }

    /// Insert a player unless one with the same id already exists.
    ///
    /// Returns whether a row was written.
    pub fn upsert_player(&mut self, player: &Player) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "INSERT INTO player (id, name) VALUES (?, ?)
             ON CONFLICT (id) DO NOTHING",
            params![player.id.as_u64(), player.name],
        )?;
        Ok(rows_affected > 0)
    }

    /// Insert a match and both sides of its box score atomically.
    pub fn insert_match(&mut self, matchup: &Match, home: &MatchTeam, away: &MatchTeam) -> Result<()> {
        if home.team_id != matchup.home_team_id
            || away.team_id != matchup.away_team_id
            || home.week != matchup.week
            || away.week != matchup.week
        {
            return Err(RecapError::MalformedSnapshot {
                message: format!(
                    "box score sides do not belong to week {} match {} vs {}",
                    matchup.week, matchup.home_team_id, matchup.away_team_id
                ),
            });
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            r#"INSERT INTO "match" (week, home_team_id, away_team_id) VALUES (?, ?, ?)"#,
            params![
                matchup.week.as_u16(),
                matchup.home_team_id.as_u32(),
                matchup.away_team_id.as_u32()
            ],
        )?;
        for side in [home, away] {
            tx.execute(
                "INSERT INTO match_team (week, team_id, actual_score, projected_score)
                 VALUES (?, ?, ?, ?)",
                params![
                    side.week.as_u16(),
                    side.team_id.as_u32(),
                    side.actual_score,
                    side.projected_score
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Insert a bare match row (snapshot import).
    pub(crate) fn insert_match_row(&mut self, matchup: &Match) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO "match" (week, home_team_id, away_team_id) VALUES (?, ?, ?)"#,
            params![
                matchup.week.as_u16(),
                matchup.home_team_id.as_u32(),
                matchup.away_team_id.as_u32()
            ],
        )?;
        Ok(())
    }

    /// Insert a bare box-score side (snapshot import).
    pub(crate) fn insert_match_team(&mut self, side: &MatchTeam) -> Result<()> {
        self.conn.execute(
            "INSERT INTO match_team (week, team_id, actual_score, projected_score)
             VALUES (?, ?, ?, ?)",
            params![
                side.week.as_u16(),
                side.team_id.as_u32(),
                side.actual_score,
                side.projected_score
            ],
        )?;
        Ok(())
    }

    pub fn insert_player_performance(&mut self, perf: &PlayerPerformance) -> Result<()> {
        self.conn.execute(
            "INSERT INTO player_performance
             (week, player_id, team_id, position, benched, injured, actual_points, projected_points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                perf.week.as_u16(),
                perf.player_id.as_u64(),
                perf.team_id.as_u32(),
                perf.position,
                perf.benched,
                perf.injured,
                perf.actual_points,
                perf.projected_points
            ],
        )?;
        Ok(())
    }

    pub fn insert_activity(&mut self, activity: &Activity) -> Result<()> {
        self.conn.execute(
            "INSERT INTO activity (team_id, action, player_id) VALUES (?, ?, ?)",
            params![
                activity.team_id.as_u32(),
                activity.action,
                activity.player_id.as_u64()
            ],
        )?;
        Ok(())
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        self.collect_rows("SELECT id, name FROM team ORDER BY id", |row| {
            Ok(Team {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.collect_rows("SELECT id, name FROM player ORDER BY id", |row| {
            Ok(Player {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        self.collect_rows(
            r#"SELECT week, home_team_id, away_team_id FROM "match"
               ORDER BY week, home_team_id"#,
            |row| {
                Ok(Match {
                    week: Week::new(row.get(0)?),
                    home_team_id: TeamId::new(row.get(1)?),
                    away_team_id: TeamId::new(row.get(2)?),
                })
            },
        )
    }

    pub fn match_teams(&self) -> Result<Vec<MatchTeam>> {
        self.collect_rows(
            "SELECT week, team_id, actual_score, projected_score FROM match_team
             ORDER BY week, team_id",
            |row| {
                Ok(MatchTeam {
                    week: Week::new(row.get(0)?),
                    team_id: TeamId::new(row.get(1)?),
                    actual_score: row.get(2)?,
                    projected_score: row.get(3)?,
                })
            },
        )
    }

    pub fn player_performances(&self) -> Result<Vec<PlayerPerformance>> {
        self.collect_rows(
            "SELECT week, player_id, team_id, position, benched, injured,
                    actual_points, projected_points
             FROM player_performance
             ORDER BY week, team_id, player_id",
            |row| {
                Ok(PlayerPerformance {
                    week: Week::new(row.get(0)?),
                    player_id: PlayerId::new(row.get(1)?),
                    team_id: TeamId::new(row.get(2)?),
                    position: row.get(3)?,
                    benched: row.get(4)?,
                    injured: row.get(5)?,
                    actual_points: row.get(6)?,
                    projected_points: row.get(7)?,
                })
            },
        )
    }

    /// Activity rows in insertion order.
    pub fn activities(&self) -> Result<Vec<Activity>> {
        self.collect_rows(
            "SELECT team_id, action, player_id FROM activity ORDER BY rowid",
            |row| {
                Ok(Activity {
                    team_id: TeamId::new(row.get(0)?),
                    action: row.get(1)?,
                    player_id: PlayerId::new(row.get(2)?),
                })
            },
        )
    }

    pub fn counts(&self) -> Result<TableCounts> {
        let count = |table: &str| -> Result<usize> {
            let n: i64 = self.conn.query_row(
                &format!(r#"SELECT COUNT(*) FROM "{}""#, table),
                [],
                |row| row.get(0),
            )?;
            Ok(n as usize)
        };

        Ok(TableCounts {
            teams: count("team")?,
            players: count("player")?,
            matches: count("match")?,
            match_teams: count("match_team")?,
            player_performances: count("player_performance")?,
            activities: count("activity")?,
        })
    }

    /// Check that every match has both box-score sides and nothing else.
    ///
    /// Per week, the number of `match_team` rows must be exactly twice the
    /// number of `match` rows.
    pub fn check_consistency(&self) -> Result<()> {
        let mismatched = self.collect_rows(
            r#"WITH match_weeks AS (
                   SELECT week, COUNT(*) AS matches FROM "match" GROUP BY week
               ),
               box_weeks AS (
                   SELECT week, COUNT(*) AS sides FROM match_team GROUP BY week
               ),
               weeks AS (
                   SELECT week FROM match_weeks UNION SELECT week FROM box_weeks
               )
               SELECT w.week, COALESCE(m.matches, 0), COALESCE(b.sides, 0)
               FROM weeks w
                   LEFT JOIN match_weeks m ON m.week = w.week
                   LEFT JOIN box_weeks b ON b.week = w.week
               WHERE COALESCE(b.sides, 0) <> 2 * COALESCE(m.matches, 0)
               ORDER BY w.week"#,
            |row| Ok((row.get::<_, u16>(0)?, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?)),
        )?;

        if let Some((week, matches, sides)) = mismatched.first() {
            return Err(RecapError::MalformedSnapshot {
                message: format!(
                    "week {} has {} matches but {} box score rows",
                    week, matches, sides
                ),
            });
        }

        let orphaned = self.collect_rows(
            r#"SELECT m.week, m.home_team_id, m.away_team_id
               FROM "match" m
               WHERE NOT EXISTS (SELECT 1 FROM match_team mt
                                 WHERE mt.week = m.week AND mt.team_id = m.home_team_id)
                  OR NOT EXISTS (SELECT 1 FROM match_team mt
                                 WHERE mt.week = m.week AND mt.team_id = m.away_team_id)
               ORDER BY m.week"#,
            |row| Ok((row.get::<_, u16>(0)?, row.get::<_, u32>(1)?, row.get::<_, u32>(2)?)),
        )?;

        if let Some((week, home, away)) = orphaned.first() {
            return Err(RecapError::MalformedSnapshot {
                message: format!(
                    "week {} match {} vs {} is missing a box score side",
                    week, home, away
                ),
            });
        }

        Ok(())
    }

    /// Run `sql` and map every row.
    pub(crate) fn collect_rows<T, F>(&self, sql: &str, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], map)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
