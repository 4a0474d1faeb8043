//! HTTP tests with mocked ESPN API responses

use super::*;
use crate::{cli::types::TeamId, RecapError};
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, header_exists, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

const LEAGUE_PATH: &str = "/seasons/2023/segments/0/leagues/12345";

/// Matches activity requests by the `offset` in their filter header.
struct ActivityOffset(u32);

impl wiremock::Match for ActivityOffset {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get(FANTASY_FILTER_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| serde_json::from_str::<Value>(s).ok())
            .and_then(|v| v["topics"]["offset"].as_u64())
            == Some(u64::from(self.0))
    }
}

fn client(server: &MockServer, credentials: Option<&Credentials>) -> EspnClient {
    EspnClient::with_base_url(
        &server.uri(),
        LeagueId::new(12345),
        Season::new(2023),
        credentials,
    )
    .unwrap()
}

fn topics(count: usize, first_player: u64) -> Value {
    let topics: Vec<Value> = (0..count as u64)
        .map(|i| {
            json!({
                "messages": [
                    {"messageTypeId": 178, "targetId": first_player + i, "to": 1}
                ]
            })
        })
        .collect();
    json!({"communication": {"topics": topics}})
}

#[tokio::test]
async fn test_fetch_teams_sends_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "mTeam"))
        .and(header("cookie", "SWID={SWID}; espn_s2=S2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"currentMatchupPeriod": 4},
            "teams": [
                {"id": 1, "name": "Alpha"},
                {"id": 2, "location": "Beta", "nickname": "Bears"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let creds = Credentials {
        swid: "{SWID}".to_string(),
        espn_s2: "S2".to_string(),
    };
    let league = client(&server, Some(&creds)).fetch_teams().await.unwrap();

    assert_eq!(league.teams.len(), 2);
    assert_eq!(league.teams[1].id, TeamId::new(2));
    assert_eq!(league.teams[1].display_name(), "Beta Bears");
    assert_eq!(league.status.unwrap().current_matchup_period, Some(4));
}

#[tokio::test]
async fn test_fetch_all_activity_pages_until_empty() {
    let server = MockServer::start().await;

    for (offset, body) in [(0, topics(25, 1000)), (25, topics(3, 2000)), (50, topics(0, 0))] {
        Mock::given(method("GET"))
            .and(path(LEAGUE_PATH))
            .and(query_param("view", "kona_league_communication"))
            .and(ActivityOffset(offset))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let all = client(&server, None).fetch_all_activity().await.unwrap();
    assert_eq!(all.len(), 28);
    assert_eq!(all[25].messages[0].target_id.as_u64(), 2000);
}

#[tokio::test]
async fn test_fetch_all_activity_empty_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "kona_league_communication"))
        .and(ActivityOffset(0))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"communication": {"topics": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let all = client(&server, None).fetch_all_activity().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_fetch_box_scores_filters_period() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "mMatchupScore"))
        .and(query_param("view", "mScoreboard"))
        .and(query_param("scoringPeriodId", "2"))
        .and(header_exists(FANTASY_FILTER_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule": [
                {
                    "matchupPeriodId": 1,
                    "home": {"teamId": 1, "totalPoints": 100.0},
                    "away": {"teamId": 2, "totalPoints": 80.0}
                },
                {
                    "matchupPeriodId": 2,
                    "home": {"teamId": 2, "totalPoints": 95.0},
                    "away": {"teamId": 1, "totalPoints": 90.0}
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schedule = client(&server, None)
        .fetch_box_scores(Week::new(2))
        .await
        .unwrap();

    assert_eq!(schedule.schedule.len(), 1);
    assert_eq!(schedule.schedule[0].home.team_id, TeamId::new(2));
}

#[tokio::test]
async fn test_auth_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client(&server, None).fetch_teams().await;
    match result {
        Err(RecapError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(401)),
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_response_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    assert!(client(&server, None).fetch_teams().await.is_err());
}

#[test]
fn test_base_url_trailing_slash() {
    let c = EspnClient::with_base_url(
        "http://localhost:1234/",
        LeagueId::new(1),
        Season::new(2024),
        None,
    )
    .unwrap();
    assert_eq!(
        c.league_url(),
        "http://localhost:1234/seasons/2024/segments/0/leagues/1"
    );
}
