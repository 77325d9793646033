//! NFL player as seen from one league season.

use serde::Serialize;
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, PlayerId, Position, SeasonId},
    core::IdentityCache,
    espn::types::RawPlayer,
    models::{
        base::{join_cache_id, parse_raw, value_at, ApiModel, ModelIds},
        ModelCache,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub league_id: Option<LeagueId>,
    pub season_id: Option<SeasonId>,
    pub player_id: Option<PlayerId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey: Option<String>,
    pub pro_team_id: Option<u16>,
    pub default_position: Option<Position>,
    pub eligible_positions: Vec<Position>,
    pub percent_owned: Option<f64>,
    pub percent_started: Option<f64>,
    pub is_droppable: bool,
    pub is_active: bool,
}

impl Player {
    /// `playerId-leagueId-seasonId`, if all three are known.
    pub fn cache_id_for(player_id: Option<PlayerId>, ids: &ModelIds) -> Option<String> {
        join_cache_id(&[
            player_id.map(|id| id.to_string()),
            ids.league_id.map(|id| id.to_string()),
            ids.season_id.map(|id| id.to_string()),
        ])
    }

    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }

    pub fn is_eligible_for(&self, position: Position) -> bool {
        self.eligible_positions.contains(&position)
    }
}

impl ApiModel for Player {
    const DISPLAY_NAME: &'static str = "Player";

    fn cache_id(&self) -> Option<String> {
        Self::cache_id_for(
            self.player_id,
            &ModelIds {
                league_id: self.league_id,
                season_id: self.season_id,
                ..ModelIds::default()
            },
        )
    }

    fn server_cache_id(data: &Value, ids: &ModelIds) -> Option<String> {
        Self::cache_id_for(value_at(data, "/playerId"), ids)
    }

    fn build_from_server(data: &Value, ids: &ModelIds, _cache: &mut ModelCache) -> Self {
        let raw: RawPlayer = parse_raw(data, Self::DISPLAY_NAME);

        Self {
            league_id: ids.league_id,
            season_id: ids.season_id,
            player_id: raw.player_id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            jersey: raw.jersey,
            pro_team_id: raw.pro_team_id,
            default_position: raw
                .default_position_id
                .map(Position::from_default_position_id),
            eligible_positions: raw
                .eligible_slot_category_ids
                .into_iter()
                .map(Position::from_slot_id)
                .collect(),
            percent_owned: raw.percent_owned,
            percent_started: raw.percent_started,
            is_droppable: raw.is_droppable.unwrap_or(true),
            is_active: raw.is_active.unwrap_or(false),
        }
    }

    fn identity_cache(cache: &mut ModelCache) -> &mut IdentityCache<Self> {
        &mut cache.players
    }
}
