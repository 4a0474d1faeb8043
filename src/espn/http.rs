//! Read-only calls against ESPN's fantasy football v3 league endpoint.

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, Week},
    core::{league_header_map, ActivityFilter, Credentials, IntoHeaderValue, ScheduleFilter},
    espn::types::{LeagueCommunication, LeagueSchedule, LeagueTeams, Topic},
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Transactions requested per page of the activity feed.
pub const ACTIVITY_PAGE_SIZE: u32 = 25;

const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Client bound to one league and season.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    league_id: LeagueId,
    season: Season,
    headers: HeaderMap,
}

impl EspnClient {
    pub fn new(
        league_id: LeagueId,
        season: Season,
        credentials: Option<&Credentials>,
    ) -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL, league_id, season, credentials)
    }

    /// Client against a different host; used to point tests at a mock server.
    pub fn with_base_url(
        base_url: &str,
        league_id: LeagueId,
        season: Season,
        credentials: Option<&Credentials>,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            league_id,
            season,
            headers: league_header_map(credentials)?,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    pub fn season(&self) -> Season {
        self.season
    }

    fn league_url(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.season, self.league_id
        )
    }

    async fn get_view<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
        extra_headers: HeaderMap,
    ) -> Result<T> {
        let mut headers = self.headers.clone();
        headers.extend(extra_headers);

        debug!(url = %self.league_url(), ?params, "ESPN request");

        let res = self
            .client
            .get(self.league_url())
            .headers(headers)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// Teams plus league status (`view=mTeam`).
    pub async fn fetch_teams(&self) -> Result<LeagueTeams> {
        self.get_view(&[("view", "mTeam".to_string())], HeaderMap::new())
            .await
    }

    /// One page of transaction topics, newest first.
    pub async fn fetch_activity_page(&self, page: u32) -> Result<Vec<Topic>> {
        let filter = ActivityFilter::page(ACTIVITY_PAGE_SIZE, page * ACTIVITY_PAGE_SIZE);
        let mut headers = HeaderMap::new();
        headers.insert(FANTASY_FILTER_HEADER, filter.to_header_value()?);

        let comm: LeagueCommunication = self
            .get_view(
                &[("view", "kona_league_communication".to_string())],
                headers,
            )
            .await?;
        Ok(comm.into_topics())
    }

    /// Every transaction topic, fetching pages until an empty one comes back.
    pub async fn fetch_all_activity(&self) -> Result<Vec<Topic>> {
        let mut topics = Vec::new();
        let mut page = 0;
        loop {
            let batch = self.fetch_activity_page(page).await?;
            if batch.is_empty() {
                break;
            }
            debug!(page, count = batch.len(), "activity page loaded");
            topics.extend(batch);
            page += 1;
        }
        Ok(topics)
    }

    /// Box scores for every matchup of `week`.
    pub async fn fetch_box_scores(&self, week: Week) -> Result<LeagueSchedule> {
        let mut headers = HeaderMap::new();
        headers.insert(
            FANTASY_FILTER_HEADER,
            ScheduleFilter::for_period(week.as_u16()).to_header_value()?,
        );

        let mut schedule: LeagueSchedule = self
            .get_view(
                &[
                    ("view", "mMatchupScore".to_string()),
                    ("view", "mScoreboard".to_string()),
                    ("scoringPeriodId", week.to_string()),
                ],
                headers,
            )
            .await?;

        // The filter header is advisory; keep only the requested period.
        schedule.schedule.retain(|m| m.matchup_period_id == week);
        Ok(schedule)
    }
}
