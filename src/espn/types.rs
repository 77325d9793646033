//! Raw ESPN payload shapes.
//!
//! These mirror the JSON the API returns for the pieces the models read.
//! Every field is optional: ESPN omits fields freely and the model layer
//! degrades to defaults instead of failing.

use crate::cli::types::{PlayerId, TeamId};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Field-level fallback: a null or mistyped value becomes the field's
/// default without failing the enclosing record.
fn de_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

/// JSON pointer to the per-team roster array in a `rosterInfo` response.
pub const ROSTER_TEAMS_POINTER: &str = "/leagueRosters/teams";

/// One element of `leagueRosters.teams`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawRosterTeam {
    #[serde(rename = "teamId", deserialize_with = "de_lenient")]
    pub team_id: Option<TeamId>,
    pub team: Option<Value>,
    #[serde(deserialize_with = "de_lenient")]
    pub slots: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "overallWins", deserialize_with = "de_lenient")]
    pub overall_wins: Option<u16>,
    #[serde(rename = "overallLosses", deserialize_with = "de_lenient")]
    pub overall_losses: Option<u16>,
    #[serde(rename = "overallTies", deserialize_with = "de_lenient")]
    pub overall_ties: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawTeam {
    #[serde(rename = "teamId", deserialize_with = "de_lenient")]
    pub team_id: Option<TeamId>,
    #[serde(rename = "teamLocation", deserialize_with = "de_lenient")]
    pub team_location: Option<String>,
    #[serde(rename = "teamNickname", deserialize_with = "de_lenient")]
    pub team_nickname: Option<String>,
    #[serde(rename = "teamAbbrev", deserialize_with = "de_lenient")]
    pub team_abbrev: Option<String>,
    #[serde(rename = "logoUrl", deserialize_with = "de_lenient")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "de_lenient")]
    pub record: Option<RawRecord>,
    #[serde(rename = "divisionStanding", deserialize_with = "de_lenient")]
    pub division_standing: Option<u16>,
}

/// One element of a roster team's `slots` array.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawSlot {
    #[serde(rename = "slotCategoryId", deserialize_with = "de_lenient")]
    pub slot_category_id: Option<u8>,
    #[serde(rename = "isKeeper", deserialize_with = "de_lenient")]
    pub is_keeper: bool,
    #[serde(rename = "isLocked", deserialize_with = "de_lenient")]
    pub is_locked: bool,
    #[serde(rename = "pvoRank", deserialize_with = "de_lenient")]
    pub pvo_rank: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPlayer {
    #[serde(rename = "playerId", deserialize_with = "de_lenient")]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "firstName", deserialize_with = "de_lenient")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", deserialize_with = "de_lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de_lenient")]
    pub jersey: Option<String>,
    #[serde(rename = "proTeamId", deserialize_with = "de_lenient")]
    pub pro_team_id: Option<u16>,
    #[serde(rename = "defaultPositionId", deserialize_with = "de_lenient")]
    pub default_position_id: Option<u8>,
    #[serde(rename = "eligibleSlotCategoryIds", deserialize_with = "de_lenient")]
    pub eligible_slot_category_ids: Vec<u8>,
    #[serde(rename = "percentOwned", deserialize_with = "de_lenient")]
    pub percent_owned: Option<f64>,
    #[serde(rename = "percentStarted", deserialize_with = "de_lenient")]
    pub percent_started: Option<f64>,
    #[serde(rename = "isDroppable", deserialize_with = "de_lenient")]
    pub is_droppable: Option<bool>,
    #[serde(rename = "isActive", deserialize_with = "de_lenient")]
    pub is_active: Option<bool>,
}
