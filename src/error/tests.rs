//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let recap_error = RecapError::from(json_error);

    match recap_error {
        RecapError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let recap_error = RecapError::from(io_error);

    match recap_error {
        RecapError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_invalid_header_error_conversion() {
    let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
    let recap_error = RecapError::from(header_error);

    match recap_error {
        RecapError::InvalidHeader(_) => (),
        _ => panic!("Expected InvalidHeader error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "not_a_number".parse::<u32>().unwrap_err();
    let recap_error = RecapError::from(parse_error);

    match recap_error {
        RecapError::InvalidNumber(_) => (),
        _ => panic!("Expected InvalidNumber error variant"),
    }
}

#[test]
fn test_database_error_conversion() {
    let db_error = rusqlite::Error::InvalidColumnType(
        0,
        "test_column".to_string(),
        rusqlite::types::Type::Null,
    );
    let recap_error = RecapError::from(db_error);

    match recap_error {
        RecapError::Database(_) => (),
        _ => panic!("Expected Database error variant"),
    }
}

#[test]
fn test_missing_league_id_error() {
    let error = RecapError::MissingLeagueId {
        env_var: "ESPN_FFL_LEAGUE_ID".to_string(),
    };

    let error_string = error.to_string();
    assert!(error_string.contains("League ID not provided"));
    assert!(error_string.contains("ESPN_FFL_LEAGUE_ID"));
}

#[test]
fn test_missing_table_names_table_and_path() {
    let error = RecapError::MissingTable {
        table: "match_team".to_string(),
        path: "data/match_team.csv".to_string(),
    };

    let error_string = error.to_string();
    assert!(error_string.contains("match_team"));
    assert!(error_string.contains("data/match_team.csv"));
}

#[test]
fn test_missing_column_names_table_and_column() {
    let error = RecapError::MissingColumn {
        table: "player_performance".to_string(),
        column: "benched".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Snapshot table player_performance is missing column benched"
    );
}

#[test]
fn test_csv_error_keeps_source() {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader("a,b\nc".as_bytes());
    let csv_error = reader
        .records()
        .find_map(|r| r.err())
        .expect("ragged rows should fail");

    let error = RecapError::csv("team", csv_error);
    assert!(error.to_string().starts_with("CSV error in table team"));

    let error_trait: &dyn std::error::Error = &error;
    assert!(error_trait.source().is_some());
}

#[test]
fn test_no_data_error() {
    let error = RecapError::NoData;
    assert_eq!(error.to_string(), "ESPN API returned no data");
    assert_eq!(format!("{:?}", error), "NoData");
}

#[test]
fn test_result_type_alias_error() {
    fn test_function() -> Result<String> {
        Err(RecapError::NoData)
    }

    match test_function().unwrap_err() {
        RecapError::NoData => (),
        _ => panic!("Expected NoData error"),
    }
}
