//! Command implementations for the league recap CLI

pub mod analyze;
pub mod ingest;
pub mod report;

use crate::{
    cli::types::{LeagueId, Season},
    RecapError, Result, LEAGUE_ID_ENV_VAR, SEASON_ENV_VAR,
};

/// Use the CLI value, falling back to `ESPN_FFL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    match league_id {
        Some(id) => Ok(id),
        None => std::env::var(LEAGUE_ID_ENV_VAR)
            .map_err(|_| RecapError::MissingLeagueId {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            })?
            .parse(),
    }
}

/// Use the CLI value, then `ESPN_FFL_SEASON`, then the default season.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    match season {
        Some(season) => Ok(season),
        None => match std::env::var(SEASON_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Season::default()),
        },
    }
}
