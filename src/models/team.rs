//! Fantasy team within a league season.

use serde::Serialize;
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, SeasonId, TeamId},
    core::IdentityCache,
    espn::types::RawTeam,
    models::{
        base::{join_cache_id, parse_raw, value_at, ApiModel, ModelIds},
        ModelCache,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub league_id: Option<LeagueId>,
    pub season_id: Option<SeasonId>,
    pub team_id: Option<TeamId>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    pub abbreviation: Option<String>,
    pub logo_url: Option<String>,
    pub wins: u16,
    pub losses: u16,
    pub ties: u16,
    pub division_standing: Option<u16>,
}

impl Team {
    /// An empty team scoped to a league season.
    pub fn new(league_id: Option<LeagueId>, season_id: Option<SeasonId>) -> Self {
        Self {
            league_id,
            season_id,
            ..Self::default()
        }
    }

    /// `teamId-leagueId-seasonId`, if all three are known.
    pub fn cache_id_for(ids: &ModelIds) -> Option<String> {
        join_cache_id(&[
            ids.team_id.map(|id| id.to_string()),
            ids.league_id.map(|id| id.to_string()),
            ids.season_id.map(|id| id.to_string()),
        ])
    }

    /// "Location Nickname", or whichever half is known.
    pub fn name(&self) -> Option<String> {
        match (self.location.as_deref(), self.nickname.as_deref()) {
            (Some(location), Some(nickname)) => Some(format!("{} {}", location, nickname)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }

    /// True for the placeholder built when a roster has no team data.
    pub fn is_empty(&self) -> bool {
        self.team_id.is_none()
    }
}

impl ApiModel for Team {
    const DISPLAY_NAME: &'static str = "Team";

    fn cache_id(&self) -> Option<String> {
        Self::cache_id_for(&ModelIds {
            league_id: self.league_id,
            season_id: self.season_id,
            team_id: self.team_id,
            scoring_period_id: None,
        })
    }

    fn server_cache_id(data: &Value, ids: &ModelIds) -> Option<String> {
        let team_id = value_at(data, "/teamId").or(ids.team_id);
        Self::cache_id_for(&ModelIds { team_id, ..*ids })
    }

    fn build_from_server(data: &Value, ids: &ModelIds, _cache: &mut ModelCache) -> Self {
        let raw: RawTeam = parse_raw(data, Self::DISPLAY_NAME);
        let record = raw.record.unwrap_or_default();

        Self {
            league_id: ids.league_id,
            season_id: ids.season_id,
            team_id: raw.team_id.or(ids.team_id),
            location: raw.team_location,
            nickname: raw.team_nickname,
            abbreviation: raw.team_abbrev,
            logo_url: raw.logo_url,
            wins: record.overall_wins.unwrap_or(0),
            losses: record.overall_losses.unwrap_or(0),
            ties: record.overall_ties.unwrap_or(0),
            division_standing: raw.division_standing,
        }
    }

    fn identity_cache(cache: &mut ModelCache) -> &mut IdentityCache<Self> {
        &mut cache.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::base::resolve;
    use serde_json::json;
    use std::sync::Arc;

    fn league_ids() -> ModelIds {
        ModelIds::new()
            .league(LeagueId::new(123))
            .season(SeasonId::new(2018))
    }

    #[test]
    fn test_build_from_server_maps_fields() {
        let mut cache = ModelCache::new();
        let team = Team::build_from_server(
            &json!({
                "teamId": 9,
                "teamLocation": "Springfield",
                "teamNickname": "Isotopes",
                "teamAbbrev": "SPR",
                "logoUrl": "https://example.com/logo.png",
                "record": { "overallWins": 8, "overallLosses": 4, "overallTies": 1 },
                "divisionStanding": 2
            }),
            &league_ids(),
            &mut cache,
        );

        assert_eq!(team.team_id, Some(TeamId::new(9)));
        assert_eq!(team.league_id, Some(LeagueId::new(123)));
        assert_eq!(team.name().as_deref(), Some("Springfield Isotopes"));
        assert_eq!(team.abbreviation.as_deref(), Some("SPR"));
        assert_eq!((team.wins, team.losses, team.ties), (8, 4, 1));
        assert_eq!(team.division_standing, Some(2));
    }

    #[test]
    fn test_cache_id_requires_team_league_and_season() {
        assert_eq!(
            Team::cache_id_for(&league_ids().team(TeamId::new(4))),
            Some("4-123-2018".to_string())
        );
        assert_eq!(Team::cache_id_for(&league_ids()), None);
        assert_eq!(Team::new(Some(LeagueId::new(123)), None).cache_id(), None);
    }

    #[test]
    fn test_server_cache_id_falls_back_to_context_team() {
        let ids = league_ids().team(TeamId::new(10));
        assert_eq!(
            Team::server_cache_id(&json!({}), &ids),
            Some("10-123-2018".to_string())
        );
        assert_eq!(
            Team::server_cache_id(&json!({ "teamId": 3 }), &ids),
            Some("3-123-2018".to_string())
        );
    }

    #[test]
    fn test_resolve_shares_instances_per_key() {
        let mut cache = ModelCache::new();
        let first: Arc<Team> = resolve(&json!({ "teamId": 5 }), &league_ids(), &mut cache);
        let second: Arc<Team> = resolve(
            &json!({ "teamId": 5, "teamNickname": "Ignored" }),
            &league_ids(),
            &mut cache,
        );

        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.nickname.is_none());
        assert_eq!(cache.teams.len(), 1);
    }

    #[test]
    fn test_non_object_payload_degrades_to_empty_team() {
        let mut cache = ModelCache::new();
        let team = Team::build_from_server(&json!("garbage"), &league_ids(), &mut cache);
        assert!(team.is_empty());
        assert_eq!(team, Team::new(Some(LeagueId::new(123)), Some(SeasonId::new(2018))));
    }

    #[test]
    fn test_name_with_partial_data() {
        let mut team = Team::new(None, None);
        assert_eq!(team.name(), None);
        team.nickname = Some("Isotopes".into());
        assert_eq!(team.name().as_deref(), Some("Isotopes"));
    }
}
