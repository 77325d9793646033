//! Shared machinery for models hydrated from ESPN payloads.
//!
//! A model is a typed struct plus one pure parser per field. Parsers receive
//! the raw JSON for their field and the partially built parent, so nested
//! models inherit the parent's league/season context. Models with a cache
//! id are memoized in a [`ModelCache`] and shared as `Arc`s.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueId, ScoringPeriodId, SeasonId, TeamId},
    core::IdentityCache,
    espn::{param, RequestParams, Transport},
    models::ModelCache,
    Result,
};

/// Identifiers a model is built under, inherited from its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelIds {
    pub league_id: Option<LeagueId>,
    pub season_id: Option<SeasonId>,
    pub team_id: Option<TeamId>,
    pub scoring_period_id: Option<ScoringPeriodId>,
}

impl ModelIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn season(mut self, season_id: SeasonId) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn scoring_period(mut self, scoring_period_id: ScoringPeriodId) -> Self {
        self.scoring_period_id = Some(scoring_period_id);
        self
    }

    /// Only the league and season, as handed to league-wide children.
    pub fn league_scope(&self) -> Self {
        Self {
            league_id: self.league_id,
            season_id: self.season_id,
            ..Self::default()
        }
    }

    /// Identifiers carried by read parameters; `teamIds` stands in for
    /// `teamId` when only the plural form is present.
    pub fn from_params(params: &RequestParams) -> Self {
        Self {
            league_id: params.get_parsed(param::LEAGUE_ID),
            season_id: params.get_parsed(param::SEASON_ID),
            team_id: params
                .get_parsed(param::TEAM_ID)
                .or_else(|| params.get_parsed(param::TEAM_IDS)),
            scoring_period_id: params.get_parsed(param::SCORING_PERIOD_ID),
        }
    }
}

/// A typed model hydrated from an ESPN payload.
pub trait ApiModel: Sized {
    /// Name used in error messages.
    const DISPLAY_NAME: &'static str;

    /// Key this instance is cached under, if its identifiers are complete.
    fn cache_id(&self) -> Option<String>;

    /// Key an instance built from `data` under `ids` would be cached under.
    fn server_cache_id(data: &Value, ids: &ModelIds) -> Option<String>;

    /// Build a fresh instance, resolving nested models through `cache`.
    fn build_from_server(data: &Value, ids: &ModelIds, cache: &mut ModelCache) -> Self;

    /// The identity cache holding instances of this model.
    fn identity_cache(cache: &mut ModelCache) -> &mut IdentityCache<Self>;
}

/// Lookup-or-build: return the cached instance for the key `data` would
/// produce, otherwise build one and cache it. Payloads without a complete
/// key are built fresh every time.
pub fn resolve<M: ApiModel>(data: &Value, ids: &ModelIds, cache: &mut ModelCache) -> Arc<M> {
    let Some(key) = M::server_cache_id(data, ids) else {
        return Arc::new(M::build_from_server(data, ids, cache));
    };

    if let Some(existing) = M::identity_cache(cache).get(&key) {
        return existing;
    }

    let built = Arc::new(M::build_from_server(data, ids, cache));
    M::identity_cache(cache).insert(key, Arc::clone(&built));
    built
}

/// Deserialize a raw payload, degrading to the default shape on mismatch.
pub(crate) fn parse_raw<T: DeserializeOwned + Default>(data: &Value, model: &str) -> T {
    if data.is_null() {
        return T::default();
    }
    T::deserialize(data).unwrap_or_else(|e| {
        warn!(model, error = %e, "unexpected payload shape, using defaults");
        T::default()
    })
}

/// Read a typed value at a JSON pointer, `None` if absent or mistyped.
pub(crate) fn value_at<T: DeserializeOwned>(data: &Value, pointer: &str) -> Option<T> {
    data.pointer(pointer).and_then(|v| T::deserialize(v).ok())
}

/// Join identifiers into a cache key, or `None` if any is missing.
pub(crate) fn join_cache_id(parts: &[Option<String>]) -> Option<String> {
    parts
        .iter()
        .cloned()
        .collect::<Option<Vec<String>>>()
        .map(|parts| parts.join("-"))
}

/// A model with its own read route.
pub trait Readable: ApiModel {
    /// Route relative to the API base URL.
    const ROUTE: &'static str;

    /// Cache key for a model identified by `ids`.
    fn cache_id_for(ids: &ModelIds) -> Option<String>;

    /// The identifiers this instance was built under.
    fn ids(&self) -> ModelIds;
}

/// Everything the base read needs: an optional bound model, the route, the
/// query parameters and whether to bypass the cache.
#[derive(Debug, Clone)]
pub struct ReadRequest<'a, M> {
    pub model: Option<&'a M>,
    pub route: String,
    pub params: RequestParams,
    pub reload: bool,
}

impl<'a, M: Readable> ReadRequest<'a, M> {
    /// Unbound request on the model's own route, reloading by default.
    pub fn new(params: RequestParams) -> Self {
        Self {
            model: None,
            route: M::ROUTE.to_string(),
            params,
            reload: true,
        }
    }

    pub fn with_model(mut self, model: &'a M) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn with_reload(mut self, reload: bool) -> Self {
        self.reload = reload;
        self
    }
}

/// Fetch and hydrate a model.
///
/// When `reload` is false and the model's key is already cached, the cached
/// instance is returned without a request. Otherwise the route is fetched,
/// a new instance is built under the bound model's identifiers (or those in
/// the parameters) and it replaces any cached one.
pub async fn read_model<M, T>(
    transport: &T,
    cache: &mut ModelCache,
    request: ReadRequest<'_, M>,
) -> Result<Arc<M>>
where
    M: Readable,
    T: Transport,
{
    let ids = request
        .model
        .map(M::ids)
        .unwrap_or_else(|| ModelIds::from_params(&request.params));
    let cache_id = M::cache_id_for(&ids);

    if !request.reload {
        if let Some(key) = cache_id.as_deref() {
            if let Some(cached) = M::identity_cache(cache).get(key) {
                debug!(model = M::DISPLAY_NAME, key, "read served from cache");
                return Ok(cached);
            }
        }
    }

    let data = transport.get(&request.route, &request.params).await?;
    let built = Arc::new(M::build_from_server(&data, &ids, cache));
    if let Some(key) = built.cache_id() {
        M::identity_cache(cache).insert(key, Arc::clone(&built));
    }
    Ok(built)
}
