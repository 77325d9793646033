//! A fantasy team's roster for one scoring period.
//!
//! The `rosterInfo` route returns every requested team under
//! `leagueRosters.teams`; a [`Roster`] picks out the entry for its own
//! `team_id` and hydrates the [`Team`] and its [`SlottedPlayer`]s from it.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::{
    cli::types::{LeagueId, ScoringPeriodId, SeasonId, TeamId},
    core::IdentityCache,
    espn::{
        param,
        types::{RawRosterTeam, ROSTER_TEAMS_POINTER},
        RequestParams, Transport,
    },
    models::{
        base::{
            join_cache_id, parse_raw, read_model, resolve, value_at, ApiModel, ModelIds,
            ReadRequest, Readable,
        },
        ModelCache, SlottedPlayer, Team,
    },
    EspnError, Result,
};


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub league_id: Option<LeagueId>,
    pub season_id: Option<SeasonId>,
    pub team_id: Option<TeamId>,
    pub scoring_period_id: Option<ScoringPeriodId>,
    pub team: Arc<Team>,
    pub players: Vec<Arc<SlottedPlayer>>,
}

/// Caller-side knobs for an instance read; anything left `None` falls back
/// to the roster's own route and to reloading.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    pub params: Option<RequestParams>,
    pub route: Option<String>,
    pub reload: Option<bool>,
}

impl Roster {
    /// An unpopulated roster: empty team, no players.
    pub fn new(ids: ModelIds) -> Self {
        Self {
            league_id: ids.league_id,
            season_id: ids.season_id,
            team_id: ids.team_id,
            scoring_period_id: ids.scoring_period_id,
            team: Arc::new(Team::new(ids.league_id, ids.season_id)),
            players: Vec::new(),
        }
    }

    /// `teamId-leagueId-seasonId-scoringPeriodId`, or `None` unless all
    /// four are present.
    ///
    /// ```rust
    /// use espn_ffl_models::{LeagueId, ModelIds, Roster, ScoringPeriodId, SeasonId, TeamId};
    ///
    /// let ids = ModelIds::new()
    ///     .team(TeamId::new(4))
    ///     .league(LeagueId::new(132123))
    ///     .season(SeasonId::new(2017))
    ///     .scoring_period(ScoringPeriodId::new(11));
    /// assert_eq!(Roster::get_cache_id(&ids).as_deref(), Some("4-132123-2017-11"));
    /// ```
    pub fn get_cache_id(ids: &ModelIds) -> Option<String> {
        join_cache_id(&[
            ids.team_id.map(|id| id.to_string()),
            ids.league_id.map(|id| id.to_string()),
            ids.season_id.map(|id| id.to_string()),
            ids.scoring_period_id.map(|id| id.to_string()),
        ])
    }

    /// Field parser for `team`.
    ///
    /// Falls back to an uncached empty team in the roster's league season
    /// when the roster has no team id or `raw` holds no entry for it.
    /// Otherwise the entry's `team` payload is resolved through the team
    /// cache, so every roster of the same team shares one [`Team`].
    pub fn parse_team(raw: Option<&Value>, roster: &Roster, cache: &mut ModelCache) -> Arc<Team> {
        let empty = || Arc::new(Team::new(roster.league_id, roster.season_id));

        let Some(team_id) = roster.team_id else {
            return empty();
        };
        let Some(entry) = Self::find_team_entry(raw, team_id) else {
            return empty();
        };

        let team_data = entry.team.unwrap_or(Value::Null);
        resolve::<Team>(&team_data, &roster.ids().league_scope().team(team_id), cache)
    }

    /// Field parser for `players`: one [`SlottedPlayer`] per slot of the
    /// roster's team entry, in slot order. Same fallbacks as
    /// [`parse_team`](Self::parse_team), yielding an empty list.
    pub fn parse_players(
        raw: Option<&Value>,
        roster: &Roster,
        cache: &mut ModelCache,
    ) -> Vec<Arc<SlottedPlayer>> {
        let Some(team_id) = roster.team_id else {
            return Vec::new();
        };
        let Some(slots) = Self::find_team_entry(raw, team_id).and_then(|entry| entry.slots)
        else {
            return Vec::new();
        };

        let ids = roster.ids();
        slots
            .iter()
            .filter(|slot| {
                let is_object = slot.is_object();
                if !is_object {
                    warn!(team_id = %team_id, "skipping malformed roster slot");
                }
                is_object
            })
            .map(|slot| resolve::<SlottedPlayer>(slot, &ids, cache))
            .collect()
    }

    /// The `leagueRosters.teams` element for `team_id`, if any.
    fn find_team_entry(raw: Option<&Value>, team_id: TeamId) -> Option<RawRosterTeam> {
        raw?
            .as_array()?
            .iter()
            .find(|entry| value_at::<TeamId>(entry, "/teamId") == Some(team_id))
            .map(|entry| parse_raw(entry, Self::DISPLAY_NAME))
    }

    /// Check the identifiers a roster read needs, in order: league, season,
    /// team. The first missing one is reported.
    pub fn validate_read_params(params: &RequestParams) -> Result<()> {
        for field in [param::LEAGUE_ID, param::SEASON_ID, param::TEAM_ID] {
            if !params.contains(field) {
                return Err(EspnError::MissingParam {
                    model: Self::DISPLAY_NAME,
                    method: "static read",
                    field,
                });
            }
        }
        Ok(())
    }

    /// Validate the request's identifiers, then fetch and hydrate a roster.
    pub async fn read<T: Transport>(
        transport: &T,
        cache: &mut ModelCache,
        request: ReadRequest<'_, Roster>,
    ) -> Result<Arc<Roster>> {
        Self::validate_read_params(&request.params)?;
        read_model(transport, cache, request).await
    }

    /// The request an instance read sends: caller params overlaid with this
    /// roster's known identifiers (`teamIds` carries the team id), the
    /// caller's route or [`Roster::ROUTE`], and `reload` defaulting to true.
    pub fn read_request(&self, options: ReadOptions) -> ReadRequest<'_, Roster> {
        let mut params = options.params.unwrap_or_default();
        params.insert_opt(param::LEAGUE_ID, self.league_id);
        params.insert_opt(param::SEASON_ID, self.season_id);
        params.insert_opt(param::TEAM_IDS, self.team_id);
        params.insert_opt(param::SCORING_PERIOD_ID, self.scoring_period_id);

        ReadRequest {
            model: Some(self),
            route: options.route.unwrap_or_else(|| Self::ROUTE.to_string()),
            params,
            reload: options.reload.unwrap_or(true),
        }
    }

    /// Instance read: re-fetch this roster using its own identifiers.
    pub async fn refresh<T: Transport>(
        &self,
        transport: &T,
        cache: &mut ModelCache,
        options: ReadOptions,
    ) -> Result<Arc<Roster>> {
        read_model(transport, cache, self.read_request(options)).await
    }

    /// Players in scoring slots.
    pub fn starters(&self) -> impl Iterator<Item = &Arc<SlottedPlayer>> {
        self.players.iter().filter(|slot| slot.is_starter())
    }

    /// Players on the bench or IR.
    pub fn reserves(&self) -> impl Iterator<Item = &Arc<SlottedPlayer>> {
        self.players.iter().filter(|slot| !slot.is_starter())
    }
}

impl ApiModel for Roster {
    const DISPLAY_NAME: &'static str = "Roster";

    fn cache_id(&self) -> Option<String> {
        Self::get_cache_id(&self.ids())
    }

    fn server_cache_id(_data: &Value, ids: &ModelIds) -> Option<String> {
        Self::get_cache_id(ids)
    }

    fn build_from_server(data: &Value, ids: &ModelIds, cache: &mut ModelCache) -> Self {
        let mut roster = Roster::new(*ids);
        let teams = data.pointer(ROSTER_TEAMS_POINTER);

        roster.team = Self::parse_team(teams, &roster, cache);
        roster.players = Self::parse_players(teams, &roster, cache);
        roster
    }

    fn identity_cache(cache: &mut ModelCache) -> &mut IdentityCache<Self> {
        &mut cache.rosters
    }
}

impl Readable for Roster {
    const ROUTE: &'static str = "rosterInfo";

    fn cache_id_for(ids: &ModelIds) -> Option<String> {
        Self::get_cache_id(ids)
    }

    fn ids(&self) -> ModelIds {
        ModelIds {
            league_id: self.league_id,
            season_id: self.season_id,
            team_id: self.team_id,
            scoring_period_id: self.scoring_period_id,
        }
    }
}
