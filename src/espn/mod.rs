//! ESPN fantasy football API access
//!
//! - `http`: league client (teams, transaction feed, box scores)
//! - `types`: response payloads
//! - `compute`: payload to snapshot-row conversion

pub mod compute;
pub mod http;
pub mod types;

pub use http::EspnClient;
