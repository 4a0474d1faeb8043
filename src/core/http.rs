//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const S2_ENV_VAR: &str = "ESPN_S2";

/// Session cookies for a private league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub swid: String,
    pub espn_s2: String,
}

impl Credentials {
    /// Read `ESPN_SWID` and `ESPN_S2`; `None` unless both are set (public leagues).
    pub fn from_env() -> Option<Self> {
        let swid = std::env::var(SWID_ENV_VAR).ok()?;
        let espn_s2 = std::env::var(S2_ENV_VAR).ok()?;
        Some(Self { swid, espn_s2 })
    }
}

/// Default headers for every league request: JSON accept, plus cookies when given.
pub fn league_header_map(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        let cookie = format!("SWID={}; espn_s2={}", creds.swid, creds.espn_s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}
