//! Season recap queries over the league store

use std::collections::BTreeMap;

use super::{models::*, schema::LeagueDatabase};
use crate::{cli::types::Week, Result};
use rusqlite::OptionalExtension;
use serde::Serialize;

/// Every recap table, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueReport {
    pub best_performance: Option<WeeklyPerformance>,
    pub worst_performance: Option<WeeklyPerformance>,
    pub points_for: Vec<TeamTotal<f64>>,
    pub points_against: Vec<TeamTotal<f64>>,
    pub closest_game: Option<GameMargin>,
    pub biggest_blowout: Option<GameMargin>,
    pub luck: Vec<LuckResult>,
    pub best_bench_performances: Vec<BenchPerformance>,
    pub bench_totals: Vec<TeamTotal<f64>>,
    pub outscored_starters: Vec<TeamTotal<u32>>,
    pub roster_moves: Vec<TeamTotal<u32>>,
    pub injured_players: Vec<TeamTotal<u32>>,
    pub schedule_swaps: Vec<ScheduleSwap>,
}

/// Median of `scores`; the mean of the middle pair for even counts.
pub fn median(scores: &mut [f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    scores.sort_by(f64::total_cmp);
    let mid = scores.len() / 2;
    if scores.len() % 2 == 0 {
        Some((scores[mid - 1] + scores[mid]) / 2.0)
    } else {
        Some(scores[mid])
    }
}

const PROJECTION_DIFFERENTIAL: &str = "
    SELECT t.name, mt.week, mt.actual_score - mt.projected_score AS differential
    FROM match_team mt JOIN team t ON mt.team_id = t.id
    WHERE mt.actual_score > 0.0 AND mt.projected_score > 0.0";

const GAME_MARGIN: &str = r#"
    SELECT m.week,
           home_team.name, home_box.actual_score,
           away_team.name, away_box.actual_score,
           abs(home_box.actual_score - away_box.actual_score) AS differential
    FROM "match" m
        JOIN match_team home_box ON m.week = home_box.week AND m.home_team_id = home_box.team_id
        JOIN match_team away_box ON m.week = away_box.week AND m.away_team_id = away_box.team_id
        JOIN team home_team ON home_team.id = home_box.team_id
        JOIN team away_team ON away_team.id = away_box.team_id
    WHERE home_box.actual_score > 0.0 AND away_box.actual_score > 0.0"#;

impl LeagueDatabase {
    fn projection_extreme(&self, order: &str) -> Result<Option<WeeklyPerformance>> {
        let sql = format!(
            "{PROJECTION_DIFFERENTIAL} ORDER BY differential {order}, t.name, mt.week LIMIT 1"
        );
        let row = self
            .conn
            .query_row(&sql, [], |row| {
                Ok(WeeklyPerformance {
                    team: row.get(0)?,
                    week: Week::new(row.get(1)?),
                    differential: row.get(2)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    /// Largest margin over projection in a single week.
    pub fn best_performance(&self) -> Result<Option<WeeklyPerformance>> {
        self.projection_extreme("DESC")
    }

    /// Largest shortfall against projection in a single week.
    pub fn worst_performance(&self) -> Result<Option<WeeklyPerformance>> {
        self.projection_extreme("ASC")
    }

    /// Total points scored per team, highest first.
    pub fn points_for(&self) -> Result<Vec<TeamTotal<f64>>> {
        self.collect_rows(
            "SELECT t.name, SUM(mt.actual_score) AS points
             FROM team t JOIN match_team mt ON t.id = mt.team_id
             GROUP BY t.id, t.name
             ORDER BY points DESC, t.name",
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    /// Total points scored by each team's opponents, highest first.
    pub fn points_against(&self) -> Result<Vec<TeamTotal<f64>>> {
        self.collect_rows(
            r#"SELECT t.name,
                      SUM(CASE WHEN t.id = m.home_team_id
                               THEN away.actual_score
                               ELSE home.actual_score END) AS points_against
               FROM team t
                   JOIN "match" m ON t.id = m.home_team_id OR t.id = m.away_team_id
                   JOIN match_team home ON m.week = home.week AND m.home_team_id = home.team_id
                   JOIN match_team away ON m.week = away.week AND m.away_team_id = away.team_id
               GROUP BY t.id, t.name
               ORDER BY points_against DESC, t.name"#,
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    fn game_margin_extreme(&self, order: &str) -> Result<Option<GameMargin>> {
        let sql = format!("{GAME_MARGIN} ORDER BY differential {order}, m.week, home_team.name LIMIT 1");
        let row = self
            .conn
            .query_row(&sql, [], |row| {
                Ok(GameMargin {
                    week: Week::new(row.get(0)?),
                    home_team: row.get(1)?,
                    home_score: row.get(2)?,
                    away_team: row.get(3)?,
                    away_score: row.get(4)?,
                    differential: row.get(5)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    pub fn closest_game(&self) -> Result<Option<GameMargin>> {
        self.game_margin_extreme("ASC")
    }

    pub fn biggest_blowout(&self) -> Result<Option<GameMargin>> {
        self.game_margin_extreme("DESC")
    }

    /// Median of every positive score, per week.
    pub fn weekly_medians(&self) -> Result<BTreeMap<Week, f64>> {
        let scores = self.collect_rows(
            "SELECT week, actual_score FROM match_team WHERE actual_score > 0.0",
            |row| Ok((Week::new(row.get(0)?), row.get::<_, f64>(1)?)),
        )?;

        let mut by_week: BTreeMap<Week, Vec<f64>> = BTreeMap::new();
        for (week, score) in scores {
            by_week.entry(week).or_default().push(score);
        }

        Ok(by_week
            .into_iter()
            .filter_map(|(week, mut scores)| median(&mut scores).map(|m| (week, m)))
            .collect())
    }

    /// Lucky wins (won while scoring under the weekly median) and unlucky
    /// losses (lost while scoring over it). Tied games are ignored.
    pub fn luck_results(&self) -> Result<Vec<LuckResult>> {
        let medians = self.weekly_medians()?;

        // (week, winner, winner score, loser, loser score)
        let decided = self.collect_rows(
            r#"SELECT m.week,
                      CASE WHEN home.actual_score > away.actual_score THEN home_t.name ELSE away_t.name END,
                      MAX(home.actual_score, away.actual_score),
                      CASE WHEN home.actual_score > away.actual_score THEN away_t.name ELSE home_t.name END,
                      MIN(home.actual_score, away.actual_score)
               FROM "match" m
                   JOIN match_team home ON m.week = home.week AND home.team_id = m.home_team_id
                   JOIN match_team away ON m.week = away.week AND away.team_id = m.away_team_id
                   JOIN team home_t ON home_t.id = m.home_team_id
                   JOIN team away_t ON away_t.id = m.away_team_id
               WHERE home.actual_score <> away.actual_score"#,
            |row| {
                Ok((
                    Week::new(row.get(0)?),
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                ))
            },
        )?;

        let mut results = Vec::new();
        for (week, winner, winner_score, loser, loser_score) in decided {
            let Some(&median) = medians.get(&week) else {
                continue;
            };

            if winner_score > 0.0 && winner_score < median {
                results.push(LuckResult {
                    tag: LuckTag::Win,
                    team: winner,
                    week,
                    score: winner_score,
                    median,
                    median_diff: winner_score - median,
                });
            }
            if loser_score > 0.0 && loser_score > median {
                results.push(LuckResult {
                    tag: LuckTag::Loss,
                    team: loser,
                    week,
                    score: loser_score,
                    median,
                    median_diff: loser_score - median,
                });
            }
        }

        results.sort_by(|a, b| {
            a.tag
                .cmp(&b.tag)
                .then_with(|| a.team.cmp(&b.team))
                .then_with(|| a.week.cmp(&b.week))
        });
        Ok(results)
    }

    /// Every benched performance, highest scoring first.
    pub fn best_bench_performances(&self) -> Result<Vec<BenchPerformance>> {
        self.collect_rows(
            "SELECT t.name, p.name, pp.week, pp.actual_points
             FROM player_performance pp
                 JOIN player p ON pp.player_id = p.id
                 JOIN team t ON pp.team_id = t.id
             WHERE pp.benched = 1
             ORDER BY pp.actual_points DESC, t.name, pp.week, p.name",
            |row| {
                Ok(BenchPerformance {
                    team: row.get(0)?,
                    player: row.get(1)?,
                    week: Week::new(row.get(2)?),
                    points: row.get(3)?,
                })
            },
        )
    }

    /// Benched points summed per team, lowest first.
    pub fn bench_totals(&self) -> Result<Vec<TeamTotal<f64>>> {
        self.collect_rows(
            "SELECT t.name, SUM(pp.actual_points) AS points
             FROM team t JOIN player_performance pp ON t.id = pp.team_id
             WHERE pp.benched = 1
             GROUP BY t.id, t.name
             ORDER BY points ASC, t.name",
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    /// Per team, the number of (week, position) pairs where a benched player
    /// outscored a starter at the same position. Higher means worse lineup
    /// calls; teams that never left points on the bench report zero.
    ///
    /// Only the bench slot counts as benched, so IR players are compared as
    /// starters: a bench player outscoring an idle IR player at the same
    /// position counts as a miss.
    pub fn outscored_starters(&self) -> Result<Vec<TeamTotal<u32>>> {
        self.collect_rows(
            "WITH misses AS (
                 SELECT DISTINCT starter.team_id, starter.week, starter.position
                 FROM player_performance starter
                     JOIN player_performance bench
                         ON starter.week = bench.week
                        AND starter.team_id = bench.team_id
                        AND starter.position = bench.position
                 WHERE bench.benched = 1
                   AND starter.benched = 0
                   AND bench.actual_points > starter.actual_points
             )
             SELECT t.name, COUNT(mi.team_id) AS outscored
             FROM team t LEFT JOIN misses mi ON mi.team_id = t.id
             GROUP BY t.id, t.name
             ORDER BY outscored DESC, t.name",
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    /// Transactions per team, including teams that made none.
    pub fn roster_moves(&self) -> Result<Vec<TeamTotal<u32>>> {
        self.collect_rows(
            "SELECT t.name, COUNT(a.team_id) AS num_moves
             FROM team t LEFT JOIN activity a ON a.team_id = t.id
             GROUP BY t.id, t.name
             ORDER BY num_moves DESC, t.name",
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    /// Distinct players flagged injured while on each team.
    pub fn injured_players(&self) -> Result<Vec<TeamTotal<u32>>> {
        self.collect_rows(
            "SELECT t.name, COUNT(DISTINCT pp.player_id) AS num_injured
             FROM player_performance pp JOIN team t ON pp.team_id = t.id
             WHERE pp.injured = 1
             GROUP BY t.id, t.name
             ORDER BY num_injured DESC, t.name",
            |row| {
                Ok(TeamTotal {
                    team: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
    }

    /// Wins team A would have had against team B's opponents, for every
    /// ordered pair of distinct teams.
    ///
    /// Each week B played, A's real score is compared to the real score of
    /// B's opponent that week; weeks where either score is zero are skipped.
    pub fn schedule_swaps(&self) -> Result<Vec<ScheduleSwap>> {
        self.collect_rows(
            r#"WITH alternate_results AS (
                   SELECT ta.id AS team_id,
                          tb.id AS schedule_team_id,
                          m.week,
                          mta.actual_score > opp.actual_score AS is_win
                   FROM team ta
                       JOIN team tb ON ta.id <> tb.id
                       JOIN "match" m ON m.home_team_id = tb.id OR m.away_team_id = tb.id
                       JOIN match_team mta ON mta.team_id = ta.id AND mta.week = m.week
                       JOIN match_team opp
                           ON opp.week = m.week
                          AND opp.team_id = CASE WHEN m.home_team_id = tb.id
                                                 THEN m.away_team_id
                                                 ELSE m.home_team_id END
                   WHERE mta.actual_score > 0.0 AND opp.actual_score > 0.0
               )
               SELECT ta.name, tb.name, SUM(ar.is_win) AS num_wins
               FROM alternate_results ar
                   JOIN team ta ON ar.team_id = ta.id
                   JOIN team tb ON ar.schedule_team_id = tb.id
               GROUP BY ar.team_id, ar.schedule_team_id, ta.name, tb.name
               ORDER BY num_wins DESC, ta.name, tb.name"#,
            |row| {
                Ok(ScheduleSwap {
                    team: row.get(0)?,
                    schedule_of: row.get(1)?,
                    wins: row.get(2)?,
                })
            },
        )
    }

    /// Run every recap query.
    pub fn build_report(&self) -> Result<LeagueReport> {
        Ok(LeagueReport {
            best_performance: self.best_performance()?,
            worst_performance: self.worst_performance()?,
            points_for: self.points_for()?,
            points_against: self.points_against()?,
            closest_game: self.closest_game()?,
            biggest_blowout: self.biggest_blowout()?,
            luck: self.luck_results()?,
            best_bench_performances: self.best_bench_performances()?,
            bench_totals: self.bench_totals()?,
            outscored_starters: self.outscored_starters()?,
            roster_moves: self.roster_moves()?,
            injured_players: self.injured_players()?,
            schedule_swaps: self.schedule_swaps()?,
        })
    }
}
