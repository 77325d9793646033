//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{LeagueId, ScoringPeriodId, SeasonId, TeamId};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch a team's roster for a scoring period.
    ///
    /// Queries `/rosterInfo` and prints one line per lineup slot.
    Roster {
        /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year (e.g. 2018).
        #[clap(long, short)]
        season: SeasonId,

        /// Fantasy team ID within the league.
        #[clap(long, short)]
        team_id: TeamId,

        /// Scoring period (week); ESPN defaults to the current one.
        #[clap(long, short)]
        week: Option<ScoringPeriodId>,

        /// Output the roster as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force a fresh read from ESPN, replacing any cached roster.
        #[clap(long)]
        refresh: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-ffl-models",
    about = "Typed ESPN Fantasy Football rosters"
)]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from ESPN Fantasy Football
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_command() {
        let app = ESPN::try_parse_from([
            "espn-ffl-models",
            "get",
            "roster",
            "--league-id",
            "132123",
            "--season",
            "2017",
            "--team-id",
            "4",
            "--week",
            "11",
            "--json",
        ])
        .unwrap();

        let Commands::Get {
            cmd:
                GetCmd::Roster {
                    league_id,
                    season,
                    team_id,
                    week,
                    json,
                    refresh,
                },
        } = app.command;
        assert_eq!(league_id, Some(LeagueId::new(132123)));
        assert_eq!(season, SeasonId::new(2017));
        assert_eq!(team_id, TeamId::new(4));
        assert_eq!(week, Some(ScoringPeriodId::new(11)));
        assert!(json);
        assert!(!refresh);
    }

    #[test]
    fn test_parse_roster_refresh_flag() {
        let app = ESPN::try_parse_from([
            "espn-ffl-models",
            "get",
            "roster",
            "--season",
            "2017",
            "--team-id",
            "4",
            "--refresh",
        ])
        .unwrap();

        let Commands::Get {
            cmd: GetCmd::Roster { refresh, json, .. },
        } = app.command;
        assert!(refresh);
        assert!(!json);
    }

    #[test]
    fn test_roster_command_requires_team() {
        let result = ESPN::try_parse_from(["espn-ffl-models", "get", "roster", "--season", "2017"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_roster_command_rejects_bad_ids() {
        let result = ESPN::try_parse_from([
            "espn-ffl-models",
            "get",
            "roster",
            "--season",
            "2017",
            "--team-id",
            "four",
        ]);
        assert!(result.is_err());
    }
}
