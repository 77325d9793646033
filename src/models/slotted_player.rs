//! A player occupying a lineup slot on a roster.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    cli::types::{LeagueId, PlayerId, Position, ScoringPeriodId, SeasonId, TeamId},
    core::IdentityCache,
    espn::types::RawSlot,
    models::{
        base::{join_cache_id, parse_raw, resolve, value_at, ApiModel, ModelIds},
        ModelCache, Player,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlottedPlayer {
    pub league_id: Option<LeagueId>,
    pub season_id: Option<SeasonId>,
    pub team_id: Option<TeamId>,
    pub scoring_period_id: Option<ScoringPeriodId>,
    pub player: Arc<Player>,
    pub position: Option<Position>,
    pub is_keeper: bool,
    pub is_locked: bool,
    pub pvo_rank: Option<u32>,
}

impl SlottedPlayer {
    /// `playerId-teamId-leagueId-seasonId-scoringPeriodId`: the same player
    /// in another week or on another team is a different slot.
    pub fn cache_id_for(player_id: Option<PlayerId>, ids: &ModelIds) -> Option<String> {
        join_cache_id(&[
            player_id.map(|id| id.to_string()),
            ids.team_id.map(|id| id.to_string()),
            ids.league_id.map(|id| id.to_string()),
            ids.season_id.map(|id| id.to_string()),
            ids.scoring_period_id.map(|id| id.to_string()),
        ])
    }

    fn ids(&self) -> ModelIds {
        ModelIds {
            league_id: self.league_id,
            season_id: self.season_id,
            team_id: self.team_id,
            scoring_period_id: self.scoring_period_id,
        }
    }

    /// Whether the slot counts toward the team's score.
    pub fn is_starter(&self) -> bool {
        self.position.map_or(false, |p| !p.is_reserve())
    }
}

impl ApiModel for SlottedPlayer {
    const DISPLAY_NAME: &'static str = "SlottedPlayer";

    fn cache_id(&self) -> Option<String> {
        Self::cache_id_for(self.player.player_id, &self.ids())
    }

    fn server_cache_id(data: &Value, ids: &ModelIds) -> Option<String> {
        Self::cache_id_for(value_at(data, "/player/playerId"), ids)
    }

    fn build_from_server(data: &Value, ids: &ModelIds, cache: &mut ModelCache) -> Self {
        let raw: RawSlot = parse_raw(data, Self::DISPLAY_NAME);
        let player = data
            .get("player")
            .map(|player| resolve::<Player>(player, &ids.league_scope(), cache))
            .unwrap_or_else(|| Arc::new(Player::default()));

        Self {
            league_id: ids.league_id,
            season_id: ids.season_id,
            team_id: ids.team_id,
            scoring_period_id: ids.scoring_period_id,
            player,
            position: raw.slot_category_id.map(Position::from_slot_id),
            is_keeper: raw.is_keeper,
            is_locked: raw.is_locked,
            pvo_rank: raw.pvo_rank,
        }
    }

    fn identity_cache(cache: &mut ModelCache) -> &mut IdentityCache<Self> {
        &mut cache.slotted_players
    }
}
