//! Recap queries through the public API on a two-team season

use league_recap::{
    storage::{Match, MatchTeam, Team},
    LeagueDatabase, TeamId, Week,
};

fn side(week: u16, team: u32, actual: f64) -> MatchTeam {
    MatchTeam {
        week: Week::new(week),
        team_id: TeamId::new(team),
        actual_score: actual,
        projected_score: actual - 4.0,
    }
}

/// X beats Y 100-80 in week 1, Y beats X 95-90 in week 2.
fn create_two_team_db() -> LeagueDatabase {
    let mut db = LeagueDatabase::new_in_memory().unwrap();
    for (id, name) in [(1, "X"), (2, "Y")] {
        db.insert_team(&Team {
            id: TeamId::new(id),
            name: name.to_string(),
        })
        .unwrap();
    }

    let week1 = Match {
        week: Week::new(1),
        home_team_id: TeamId::new(1),
        away_team_id: TeamId::new(2),
    };
    db.insert_match(&week1, &side(1, 1, 100.0), &side(1, 2, 80.0))
        .unwrap();

    let week2 = Match {
        week: Week::new(2),
        home_team_id: TeamId::new(2),
        away_team_id: TeamId::new(1),
    };
    db.insert_match(&week2, &side(2, 2, 95.0), &side(2, 1, 90.0))
        .unwrap();

    db
}

#[test]
fn test_points_for() {
    let db = create_two_team_db();
    let totals: Vec<(String, f64)> = db
        .points_for()
        .unwrap()
        .into_iter()
        .map(|t| (t.team, t.value))
        .collect();

    assert_eq!(totals, vec![("X".to_string(), 190.0), ("Y".to_string(), 175.0)]);
}

#[test]
fn test_points_against() {
    let db = create_two_team_db();
    let totals: Vec<(String, f64)> = db
        .points_against()
        .unwrap()
        .into_iter()
        .map(|t| (t.team, t.value))
        .collect();

    assert_eq!(totals, vec![("Y".to_string(), 190.0), ("X".to_string(), 175.0)]);
}

#[test]
fn test_points_for_matches_box_scores() {
    let db = create_two_team_db();
    let sides = db.match_teams().unwrap();

    for team in db.teams().unwrap() {
        let expected: f64 = sides
            .iter()
            .filter(|s| s.team_id == team.id)
            .map(|s| s.actual_score)
            .sum();
        let reported = db
            .points_for()
            .unwrap()
            .into_iter()
            .find(|t| t.team == team.name)
            .unwrap()
            .value;
        assert_eq!(reported, expected);
    }
}

#[test]
fn test_closest_game_is_week_two() {
    let db = create_two_team_db();

    let closest = db.closest_game().unwrap().unwrap();
    assert_eq!(closest.week, Week::new(2));
    assert_eq!(closest.differential, 5.0);

    let blowout = db.biggest_blowout().unwrap().unwrap();
    assert_eq!(blowout.week, Week::new(1));
    assert_eq!(blowout.differential, 20.0);
    assert!(closest.differential <= blowout.differential);
}

#[test]
fn test_two_box_scores_per_match() {
    let db = create_two_team_db();
    let matches = db.matches().unwrap();
    let sides = db.match_teams().unwrap();

    for week in [Week::new(1), Week::new(2)] {
        let m = matches.iter().filter(|m| m.week == week).count();
        let s = sides.iter().filter(|s| s.week == week).count();
        assert_eq!(s, 2 * m);
    }
    assert!(db.check_consistency().is_ok());
}

#[test]
fn test_two_team_luck() {
    let db = create_two_team_db();
    // With two teams the median sits between winner and loser every week
    assert!(db.luck_results().unwrap().is_empty());
}

#[test]
fn test_two_team_schedule_swap() {
    let db = create_two_team_db();
    let swaps = db.schedule_swaps().unwrap();

    // Each team's swapped opponent is itself, which is never a win
    assert_eq!(swaps.len(), 2);
    assert!(swaps.iter().all(|s| s.wins == 0));
}

#[test]
fn test_projection_differential() {
    let db = create_two_team_db();

    let best = db.best_performance().unwrap().unwrap();
    assert_eq!(best.differential, 4.0);
    // All differentials tie; the first team alphabetically wins the tie
    assert_eq!(best.team, "X");
    assert_eq!(best.week, Week::new(1));
}
