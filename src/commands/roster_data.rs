//! Roster command implementation

use std::sync::Arc;

use crate::{
    espn::{param, EspnClient, RequestParams, Transport},
    models::{ModelCache, ReadRequest, Roster},
    LeagueId, Result, ScoringPeriodId, SeasonId, TeamId,
};

use super::resolve_league_id;

/// Parameters for the roster command.
#[derive(Debug, Clone)]
pub struct RosterDataParams {
    pub league_id: Option<LeagueId>,
    pub season: SeasonId,
    pub team_id: TeamId,
    pub week: Option<ScoringPeriodId>,
    pub as_json: bool,
    /// Bypass a cached roster and always hit ESPN.
    pub refresh: bool,
}

/// Handle the roster command
pub async fn handle_roster_data(params: RosterDataParams) -> Result<()> {
    let client = EspnClient::from_env()?;
    let mut cache = ModelCache::new();

    // tarpaulin::skip - HTTP call, tested via integration tests
    let roster = fetch_roster(&client, &mut cache, &params).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(roster.as_ref())?);
    } else {
        for line in format_roster(&roster) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Read the roster described by `params` through `transport`. Without
/// `refresh`, a roster already in `cache` is returned as is.
pub async fn fetch_roster<T: Transport>(
    transport: &T,
    cache: &mut ModelCache,
    params: &RosterDataParams,
) -> Result<Arc<Roster>> {
    let league_id = resolve_league_id(params.league_id)?;

    let mut request = RequestParams::new()
        .with(param::LEAGUE_ID, league_id)
        .with(param::SEASON_ID, params.season)
        .with(param::TEAM_ID, params.team_id)
        .with(param::TEAM_IDS, params.team_id);
    request.insert_opt(param::SCORING_PERIOD_ID, params.week);

    Roster::read(
        transport,
        cache,
        ReadRequest::new(request).with_reload(params.refresh),
    )
    .await
}

/// One header line for the team, then one line per slot.
pub fn format_roster(roster: &Roster) -> Vec<String> {
    let team = &roster.team;
    let name = team.name().unwrap_or_else(|| "Unknown team".to_string());
    let header = match &team.abbreviation {
        Some(abbrev) => format!(
            "{} ({}) {}-{}-{}",
            name, abbrev, team.wins, team.losses, team.ties
        ),
        None => format!("{} {}-{}-{}", name, team.wins, team.losses, team.ties),
    };

    let mut lines = vec![header];
    for slot in &roster.players {
        let position = slot
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let player = slot
            .player
            .full_name()
            .unwrap_or_else(|| "(empty)".to_string());
        let keeper = if slot.is_keeper { " [K]" } else { "" };
        lines.push(format!("{:<6} {}{}", position, player, keeper));
    }
    lines
}
