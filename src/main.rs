//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use espn_ffl_models::{
    cli::{Commands, GetCmd, ESPN},
    commands::roster_data::{handle_roster_data, RosterDataParams},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = ESPN::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Roster {
                league_id,
                season,
                team_id,
                week,
                json,
                refresh,
            } => {
                handle_roster_data(RosterDataParams {
                    league_id,
                    season,
                    team_id,
                    week,
                    as_json: json,
                    refresh,
                })
                .await?
            }
        },
    }

    Ok(())
}
