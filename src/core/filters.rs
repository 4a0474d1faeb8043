//! `x-fantasy-filter` header payloads for ESPN league requests.
//!
//! ESPN narrows league views server-side through a JSON document passed in the
//! `x-fantasy-filter` header. Two views need one here:
//!
//! - **kona_league_communication**: transaction topics, paged with `limit`/`offset`
//! - **mMatchupScore**: the schedule, restricted to a single matchup period

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Message type ids ESPN uses for roster transactions.
pub const TRANSACTION_MESSAGE_TYPES: [u16; 6] = [178, 180, 179, 239, 181, 244];

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterType": {"value": ["ACTIVITY_TRANSACTIONS"]}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

#[derive(Debug, Serialize)]
pub struct SortPriority {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u8,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
}

/// One page of the league's transaction feed.
#[derive(Debug, Serialize)]
pub struct ActivityFilter {
    pub topics: TopicsFilter,
}

#[derive(Debug, Serialize)]
pub struct TopicsFilter {
    #[serde(rename = "filterType")]
    pub filter_type: Val<Vec<&'static str>>,
    pub limit: u32,
    #[serde(rename = "limitPerMessageSet")]
    pub limit_per_message_set: Val<u32>,
    pub offset: u32,
    #[serde(rename = "sortMessageDate")]
    pub sort_message_date: SortPriority,
    #[serde(rename = "sortFor")]
    pub sort_for: SortPriority,
    #[serde(rename = "filterIncludeMessageTypeIds")]
    pub filter_include_message_type_ids: Val<Vec<u16>>,
}

impl ActivityFilter {
    /// Newest-first transaction topics starting at `offset`.
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            topics: TopicsFilter {
                filter_type: Val {
                    value: vec!["ACTIVITY_TRANSACTIONS"],
                },
                limit,
                limit_per_message_set: Val { value: 25 },
                offset,
                sort_message_date: SortPriority {
                    sort_priority: 1,
                    sort_asc: false,
                },
                sort_for: SortPriority {
                    sort_priority: 2,
                    sort_asc: false,
                },
                filter_include_message_type_ids: Val {
                    value: TRANSACTION_MESSAGE_TYPES.to_vec(),
                },
            },
        }
    }
}

/// Restricts the schedule view to the matchups of one matchup period.
#[derive(Debug, Serialize)]
pub struct ScheduleFilter {
    pub schedule: MatchupPeriodFilter,
}

#[derive(Debug, Serialize)]
pub struct MatchupPeriodFilter {
    #[serde(rename = "filterMatchupPeriodIds")]
    pub filter_matchup_period_ids: Val<Vec<u16>>,
}

impl ScheduleFilter {
    pub fn for_period(period: u16) -> Self {
        Self {
            schedule: MatchupPeriodFilter {
                filter_matchup_period_ids: Val {
                    value: vec![period],
                },
            },
        }
    }
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_activity_filter_shape() {
        let value = serde_json::to_value(ActivityFilter::page(25, 50)).unwrap();

        assert_eq!(value["topics"]["limit"], json!(25));
        assert_eq!(value["topics"]["offset"], json!(50));
        assert_eq!(
            value["topics"]["filterType"]["value"],
            json!(["ACTIVITY_TRANSACTIONS"])
        );
        assert_eq!(value["topics"]["sortMessageDate"]["sortAsc"], json!(false));
        assert_eq!(
            value["topics"]["filterIncludeMessageTypeIds"]["value"],
            json!([178, 180, 179, 239, 181, 244])
        );
    }

    #[test]
    fn test_schedule_filter_shape() {
        let value = serde_json::to_value(ScheduleFilter::for_period(3)).unwrap();
        assert_eq!(
            value,
            json!({"schedule": {"filterMatchupPeriodIds": {"value": [3]}}})
        );
    }

    #[test]
    fn test_into_header_value_is_compact_json() {
        let header = ScheduleFilter::for_period(1).to_header_value().unwrap();
        let parsed: Value = serde_json::from_str(header.to_str().unwrap()).unwrap();
        assert_eq!(parsed["schedule"]["filterMatchupPeriodIds"]["value"][0], 1);
    }
}
