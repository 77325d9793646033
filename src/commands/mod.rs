//! Command implementations for the ESPN Fantasy Football model CLI

pub mod roster_data;

use crate::{EspnError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Use the given league id, falling back to `ESPN_FFL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(league_id) = league_id {
        return Ok(league_id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.parse(),
        Err(_) => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
