//! Core utilities for the league recap tool
//!
//! - `http`: session cookies and default request headers
//! - `filters`: ESPN `x-fantasy-filter` payloads

pub mod filters;
pub mod http;

pub use filters::{ActivityFilter, IntoHeaderValue, ScheduleFilter, Val};
pub use http::{league_header_map, Credentials};
