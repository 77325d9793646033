//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const S2_ENV_VAR: &str = "ESPN_S2";

/// Headers sent with every request: JSON accept, plus the `SWID` and
/// `espn_s2` cookies when both env vars are set (private leagues).
pub fn common_headers() -> Result<HeaderMap> {
    let swid = std::env::var(SWID_ENV_VAR).ok();
    let s2 = std::env::var(S2_ENV_VAR).ok();
    cookie_headers(swid.as_deref(), s2.as_deref())
}

fn cookie_headers(swid: Option<&str>, s2: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let (Some(swid), Some(s2)) = (swid, s2) {
        let cookie = format!("SWID={}; espn_s2={}", swid, s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}
