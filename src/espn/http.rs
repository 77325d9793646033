//! Transport for ESPN read endpoints.
//!
//! Models never talk to reqwest directly: they hand a route and a set of
//! query parameters to a [`Transport`], which returns the raw JSON body.

use reqwest::{header::HeaderMap, Client};
use serde::Serialize;
use serde_json::Value;
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::debug;

use crate::{core::common_headers, EspnError, Result};


/// Base path of the legacy ESPN Fantasy Football v2 API, where `rosterInfo`
/// is served. ESPN has since retired it, so live reads need
/// [`API_URL_ENV_VAR`] pointed at a compatible host.
pub const FFL_API_BASE_URL: &str = "https://games.espn.com/ffl/api/v2";

/// Overrides [`FFL_API_BASE_URL`] when set.
pub const API_URL_ENV_VAR: &str = "ESPN_FFL_API_URL";

/// Query parameter names shared by the models.
pub mod param {
    pub const LEAGUE_ID: &str = "leagueId";
    pub const SEASON_ID: &str = "seasonId";
    pub const TEAM_ID: &str = "teamId";
    pub const TEAM_IDS: &str = "teamIds";
    pub const SCORING_PERIOD_ID: &str = "scoringPeriodId";
}

/// Query parameters for a read, kept sorted so requests are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, String>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    /// Insert only when `value` is present.
    pub fn insert_opt<V: fmt::Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Parse a parameter, treating unparseable values as absent.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every entry of `other` over this set, replacing duplicates.
    pub fn merge(&mut self, other: &RequestParams) {
        self.0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Something that can fetch a route with query parameters and return JSON.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, route: &str, params: &RequestParams) -> Result<Value>;
}

/// reqwest-backed [`Transport`] for the ESPN API.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl EspnClient {
    /// Client for [`API_URL_ENV_VAR`] (or the public API), with cookies from
    /// the environment.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| FFL_API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("espn-ffl-models/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            headers: common_headers()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

impl Transport for EspnClient {
    async fn get(&self, route: &str, params: &RequestParams) -> Result<Value> {
        let url = self.url_for(route);
        debug!(%url, ?params, "ESPN read");

        let body = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        if body.is_null() {
            return Err(EspnError::NoData);
        }
        Ok(body)
    }
}
