use crate::cli::types::{PlayerId, TeamId, Week};
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Root of the `mTeam` league view.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueTeams {
    #[serde(default)]
    pub teams: Vec<EspnTeam>,
    #[serde(default)]
    pub status: Option<LeagueStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod", default)]
    pub current_matchup_period: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
}

impl EspnTeam {
    /// Newer leagues carry `name`; older ones split it into location + nickname.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }

        let joined = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !joined.is_empty() {
            joined
        } else {
            self.abbrev
                .clone()
                .unwrap_or_else(|| format!("Team {}", self.id))
        }
    }
}

/// Root of the `kona_league_communication` view.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueCommunication {
    #[serde(default)]
    pub communication: Option<Communication>,
}

impl LeagueCommunication {
    pub fn into_topics(self) -> Vec<Topic> {
        self.communication.map(|c| c.topics).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Communication {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// One transaction: a set of messages posted together (e.g. add + drop).
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(rename = "messageTypeId")]
    pub message_type_id: u16,
    #[serde(rename = "targetId")]
    pub target_id: PlayerId,
    #[serde(rename = "for", default)]
    pub for_team: Option<i64>,
    #[serde(rename = "from", default)]
    pub from_team: Option<i64>,
    #[serde(rename = "to", default)]
    pub to_team: Option<i64>,
}

/// Root of the `mMatchupScore` + `mScoreboard` views.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueSchedule {
    #[serde(default)]
    pub schedule: Vec<Matchup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Matchup {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: Week,
    pub home: MatchupSide,
    /// Absent on bye weeks.
    #[serde(default)]
    pub away: Option<MatchupSide>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
    #[serde(rename = "totalPointsLive", default)]
    pub total_points_live: Option<f64>,
    #[serde(rename = "totalProjectedPointsLive", default)]
    pub total_projected_points_live: Option<f64>,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster: Option<Roster>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "lineupSlotId")]
    pub lineup_slot_id: u8,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: EspnPlayer,
}

/// Player data embedded in a box-score lineup
#[derive(Debug, Clone, Deserialize)]
pub struct EspnPlayer {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i16,
    #[serde(default)]
    pub injured: bool,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub stats: Vec<PlayerStats>,
}

impl EspnPlayer {
    /// Flagged injured, or carrying any status other than healthy.
    pub fn is_injured(&self) -> bool {
        self.injured
            || self
                .injury_status
                .as_deref()
                .is_some_and(|s| !matches!(s, "ACTIVE" | "NORMAL"))
    }
}

/// Player statistics for a specific period
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Week,
    /// 0 = actual, 1 = projected
    #[serde(rename = "statSourceId")]
    pub stat_source_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: f64,
}
