//! Ingest command: pull a league season from ESPN into a snapshot.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info, warn};

use crate::{
    cli::types::{LeagueId, Season, TeamId, Week},
    core::Credentials,
    espn::{
        compute::{activity_rows, box_score_rows},
        types::LeagueStatus,
        EspnClient,
    },
    storage::{export_snapshot, LeagueDatabase, TableCounts, Team},
    RecapError, Result,
};

use super::{resolve_league_id, resolve_season};

/// Last week to ingest: the explicit value, otherwise the last completed
/// matchup period reported by the league (never before week 1).
pub fn resolve_through_week(through_week: Option<Week>, status: Option<&LeagueStatus>) -> Week {
    through_week.unwrap_or_else(|| {
        let current = status.and_then(|s| s.current_matchup_period).unwrap_or(1);
        Week::new(current.saturating_sub(1).max(1))
    })
}

/// Load teams, transactions and box scores for weeks `1..=through_week`
/// into `db`. Returns the last week ingested.
pub async fn ingest_league(
    client: &EspnClient,
    db: &mut LeagueDatabase,
    through_week: Option<Week>,
) -> Result<Week> {
    info!(league_id = %client.league_id(), season = %client.season(), "loading teams");
    let league = client.fetch_teams().await?;
    if league.teams.is_empty() {
        return Err(RecapError::NoData);
    }

    let mut known_teams: HashSet<TeamId> = HashSet::new();
    for team in &league.teams {
        db.insert_team(&Team {
            id: team.id,
            name: team.display_name(),
        })?;
        known_teams.insert(team.id);
    }

    info!("loading activity");
    let topics = client.fetch_all_activity().await?;
    let activities = activity_rows(&topics, &known_teams);
    for activity in &activities {
        db.insert_activity(activity)?;
    }
    info!(transactions = topics.len(), rows = activities.len(), "activity loaded");

    let through = resolve_through_week(through_week, league.status.as_ref());
    info!(through_week = %through, "loading matches");
    for week in through.through() {
        let schedule = client.fetch_box_scores(week).await?;
        if schedule.schedule.is_empty() {
            warn!(week = %week, "no box scores returned");
        }

        for matchup in &schedule.schedule {
            let Some(rows) = box_score_rows(week, matchup) else {
                debug!(week = %week, team_id = %matchup.home.team_id, "bye week, skipping");
                continue;
            };

            db.insert_match(&rows.matchup, &rows.home, &rows.away)?;
            for (player, performance) in &rows.lineup {
                db.upsert_player(player)?;
                db.insert_player_performance(performance)?;
            }
        }
        debug!(week = %week, matches = schedule.schedule.len(), "week loaded");
    }

    Ok(through)
}

/// Handle the ingest command
pub async fn handle_ingest(
    league_id: Option<LeagueId>,
    season: Option<Season>,
    through_week: Option<Week>,
    out: &Path,
) -> Result<TableCounts> {
    let league_id = resolve_league_id(league_id)?;
    let season = resolve_season(season)?;

    let credentials = Credentials::from_env();
    if credentials.is_none() {
        info!("ESPN_SWID/ESPN_S2 not set, requesting as a public league");
    }

    let client = EspnClient::new(league_id, season, credentials.as_ref())?;
    let mut db = LeagueDatabase::new_in_memory()?;

    let through = ingest_league(&client, &mut db, through_week).await?;
    db.check_consistency()?;

    let counts = export_snapshot(&db, out)?;
    info!(through_week = %through, out = %out.display(), "ingest complete");
    Ok(counts)
}
