//! Deserialization tests for ESPN league payloads

use super::*;
use serde_json::json;

#[test]
fn test_league_teams_deserialization() {
    let payload = json!({
        "status": {"currentMatchupPeriod": 5, "isActive": true},
        "teams": [
            {"id": 1, "name": "Gridiron Gang", "abbrev": "GG"},
            {"id": 2, "location": "Tampa", "nickname": "Tacos", "abbrev": "TT"},
            {"id": 3, "abbrev": "NON"}
        ]
    });

    let league: LeagueTeams = serde_json::from_value(payload).unwrap();
    assert_eq!(league.teams.len(), 3);
    assert_eq!(league.status.unwrap().current_matchup_period, Some(5));

    assert_eq!(league.teams[0].display_name(), "Gridiron Gang");
    assert_eq!(league.teams[1].display_name(), "Tampa Tacos");
    assert_eq!(league.teams[2].display_name(), "NON");
}

#[test]
fn test_team_without_any_name_falls_back_to_id() {
    let team: EspnTeam = serde_json::from_value(json!({"id": 9, "name": "  "})).unwrap();
    assert_eq!(team.display_name(), "Team 9");
}

#[test]
fn test_communication_topics() {
    let payload = json!({
        "communication": {
            "topics": [
                {
                    "id": "abc",
                    "messages": [
                        {"messageTypeId": 178, "targetId": 4262921, "to": 3},
                        {"messageTypeId": 179, "targetId": 15847, "from": 3}
                    ]
                }
            ]
        }
    });

    let comm: LeagueCommunication = serde_json::from_value(payload).unwrap();
    let topics = comm.into_topics();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].messages.len(), 2);
    assert_eq!(topics[0].messages[0].to_team, Some(3));
    assert_eq!(topics[0].messages[1].target_id, PlayerId::new(15847));
    assert_eq!(topics[0].messages[1].for_team, None);
}

#[test]
fn test_missing_communication_is_empty() {
    let comm: LeagueCommunication = serde_json::from_value(json!({"id": 1})).unwrap();
    assert!(comm.into_topics().is_empty());
}

#[test]
fn test_schedule_with_bye_week() {
    let payload = json!({
        "schedule": [
            {
                "matchupPeriodId": 1,
                "home": {"teamId": 1, "totalPoints": 101.5},
                "away": {"teamId": 2, "totalPoints": 99.0, "totalPointsLive": 99.25}
            },
            {
                "matchupPeriodId": 1,
                "home": {"teamId": 3, "totalPoints": 88.0}
            }
        ]
    });

    let schedule: LeagueSchedule = serde_json::from_value(payload).unwrap();
    assert_eq!(schedule.schedule.len(), 2);
    assert_eq!(schedule.schedule[0].matchup_period_id, Week::new(1));
    assert_eq!(
        schedule.schedule[0].away.as_ref().unwrap().total_points_live,
        Some(99.25)
    );
    assert!(schedule.schedule[1].away.is_none());
    assert!(schedule.schedule[1].home.roster.is_none());
}

#[test]
fn test_roster_entry_player() {
    let payload = json!({
        "playerId": 3139477,
        "lineupSlotId": 20,
        "playerPoolEntry": {
            "appliedStatTotal": 12.3,
            "player": {
                "id": 3139477,
                "fullName": "Patrick Mahomes",
                "defaultPositionId": 1,
                "injured": false,
                "injuryStatus": "ACTIVE",
                "stats": [
                    {"seasonId": 2025, "scoringPeriodId": 2, "statSourceId": 0, "appliedTotal": 12.3},
                    {"seasonId": 2025, "scoringPeriodId": 2, "statSourceId": 1, "appliedTotal": 20.1}
                ]
            }
        }
    });

    let entry: RosterEntry = serde_json::from_value(payload).unwrap();
    let player = &entry.player_pool_entry.player;
    assert_eq!(entry.lineup_slot_id, 20);
    assert_eq!(player.full_name.as_deref(), Some("Patrick Mahomes"));
    assert_eq!(player.stats.len(), 2);
    assert_eq!(player.stats[1].stat_source_id, 1);
    assert!(!player.is_injured());
}

#[test]
fn test_injury_detection() {
    let questionable: EspnPlayer = serde_json::from_value(json!({
        "id": 1, "injured": false, "injuryStatus": "QUESTIONABLE"
    }))
    .unwrap();
    assert!(questionable.is_injured());

    let flagged: EspnPlayer =
        serde_json::from_value(json!({"id": 2, "injured": true})).unwrap();
    assert!(flagged.is_injured());

    let healthy: EspnPlayer =
        serde_json::from_value(json!({"id": 3, "injuryStatus": "NORMAL"})).unwrap();
    assert!(!healthy.is_injured());
}

#[test]
fn test_matchup_requires_home_side() {
    let result: std::result::Result<Matchup, _> =
        serde_json::from_value(json!({"matchupPeriodId": 1}));
    assert!(result.is_err());
}
