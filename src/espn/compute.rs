//! Conversion of ESPN payloads into snapshot rows.

use std::collections::HashSet;

use tracing::warn;

use crate::{
    cli::types::{LineupSlot, Position, TeamId, Week},
    espn::types::{EspnPlayer, Matchup, MatchupSide, Message, Topic},
    storage::{Activity, Match, MatchTeam, Player, PlayerPerformance},
};


/// Rows produced by one box score.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScoreRows {
    pub matchup: Match,
    pub home: MatchTeam,
    pub away: MatchTeam,
    pub lineup: Vec<(Player, PlayerPerformance)>,
}

/// Actual and projected points for `week` from a player's stat lines.
///
/// `statSourceId` 0 is the actual score and 1 the projection. Missing lines
/// count as zero.
pub fn select_weekly_points(player: &EspnPlayer, week: Week) -> (f64, f64) {
    let mut actual = 0.0;
    let mut projected = 0.0;
    for stats in player.stats.iter().filter(|s| s.scoring_period_id == week) {
        match stats.stat_source_id {
            0 => actual = stats.applied_total,
            1 => projected = stats.applied_total,
            _ => {}
        }
    }
    (actual, projected)
}

fn lineup_rows(week: Week, side: &MatchupSide) -> Vec<(Player, PlayerPerformance)> {
    let Some(roster) = side.roster.as_ref() else {
        return Vec::new();
    };

    roster
        .entries
        .iter()
        .map(|entry| {
            let player = &entry.player_pool_entry.player;
            let (actual, projected) = select_weekly_points(player, week);
            let name = player
                .full_name
                .clone()
                .unwrap_or_else(|| format!("Player {}", entry.player_id));

            (
                Player {
                    id: entry.player_id,
                    name,
                },
                PlayerPerformance {
                    week,
                    player_id: entry.player_id,
                    team_id: side.team_id,
                    position: Position::from_espn_id(player.default_position_id).to_string(),
                    benched: LineupSlot::from_espn_id(entry.lineup_slot_id).is_bench(),
                    injured: player.is_injured(),
                    actual_points: actual,
                    projected_points: projected,
                },
            )
        })
        .collect()
}

/// Team projection: ESPN's live projection when present, otherwise the sum of
/// the starters' projections.
fn projected_score(side: &MatchupSide, lineup: &[(Player, PlayerPerformance)]) -> f64 {
    if let Some(projected) = side.total_projected_points_live {
        return projected;
    }

    let Some(roster) = side.roster.as_ref() else {
        return 0.0;
    };

    roster
        .entries
        .iter()
        .zip(lineup)
        .filter(|(entry, _)| LineupSlot::from_espn_id(entry.lineup_slot_id).is_starting())
        .map(|(_, (_, perf))| perf.projected_points)
        .sum()
}

fn match_team(week: Week, side: &MatchupSide, lineup: &[(Player, PlayerPerformance)]) -> MatchTeam {
    MatchTeam {
        week,
        team_id: side.team_id,
        actual_score: side.total_points_live.unwrap_or(side.total_points),
        projected_score: projected_score(side, lineup),
    }
}

/// Rows for one scheduled matchup, or `None` for a bye (no away side).
pub fn box_score_rows(week: Week, matchup: &Matchup) -> Option<BoxScoreRows> {
    let away = matchup.away.as_ref()?;
    let home = &matchup.home;

    let home_lineup = lineup_rows(week, home);
    let away_lineup = lineup_rows(week, away);

    let home_row = match_team(week, home, &home_lineup);
    let away_row = match_team(week, away, &away_lineup);

    let mut lineup = home_lineup;
    lineup.extend(away_lineup);

    Some(BoxScoreRows {
        matchup: Match {
            week,
            home_team_id: home.team_id,
            away_team_id: away.team_id,
        },
        home: home_row,
        away: away_row,
        lineup,
    })
}

/// Label for a transaction message type.
pub fn action_label(message_type_id: u16) -> &'static str {
    match message_type_id {
        178 => "FA ADDED",
        180 => "WAIVER ADDED",
        179 | 181 | 239 => "DROPPED",
        244 => "TRADED",
        _ => "UNKNOWN",
    }
}

/// The team a message belongs to: trades come `from` a team, 239 drops are
/// posted `for` one, everything else goes `to` one.
pub fn message_team(message: &Message) -> Option<i64> {
    match message.message_type_id {
        244 => message.from_team,
        239 => message.for_team,
        _ => message.to_team,
    }
}

/// Flatten transaction topics into activity rows.
///
/// Messages whose team is not one of `known_teams` (free agency, league
/// office) are skipped.
pub fn activity_rows(topics: &[Topic], known_teams: &HashSet<TeamId>) -> Vec<Activity> {
    let mut rows = Vec::new();
    for message in topics.iter().flat_map(|t| t.messages.iter()) {
        let team = message_team(message)
            .and_then(|id| u32::try_from(id).ok())
            .map(TeamId::new)
            .filter(|id| known_teams.contains(id));

        match team {
            Some(team_id) => rows.push(Activity {
                team_id,
                action: action_label(message.message_type_id).to_string(),
                player_id: message.target_id,
            }),
            None => warn!(
                message_type = message.message_type_id,
                player_id = %message.target_id,
                "skipping transaction without a league team"
            ),
        }
    }
    rows
}
