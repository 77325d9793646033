//! ESPN Fantasy Football model layer
//!
//! Maps raw ESPN fantasy football JSON into typed, shared models and issues
//! the parameterized reads that fetch them.
//!
//! ## Features
//!
//! - **Typed models**: [`Roster`], [`Team`], [`SlottedPlayer`] and [`Player`]
//!   built from server payloads, one pure parser per field
//! - **Identity caching**: one shared `Arc` per composite key
//!   (`teamId-leagueId-seasonId-scoringPeriodId` for rosters), held in an
//!   explicit, bounded [`ModelCache`]
//! - **Validated reads**: required identifiers are checked before any
//!   request goes out
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_ffl_models::{
//!     espn::{EspnClient, RequestParams},
//!     ModelCache, ReadRequest, Roster,
//! };
//!
//! # async fn example() -> espn_ffl_models::Result<()> {
//! let client = EspnClient::from_env()?;
//! let mut cache = ModelCache::new();
//!
//! let params = RequestParams::new()
//!     .with("leagueId", 132123)
//!     .with("seasonId", 2018)
//!     .with("teamId", 4)
//!     .with("teamIds", 4);
//! let roster = Roster::read(&client, &mut cache, ReadRequest::new(params)).await?;
//!
//! for slot in &roster.players {
//!     println!("{:?} {:?}", slot.position, slot.player.full_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456   # default league for the CLI
//! export ESPN_SWID='{...}'           # private leagues only
//! export ESPN_S2='...'
//! export ESPN_FFL_API_URL=http://localhost:8080   # alternate API host
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, ScoringPeriodId, SeasonId, TeamId};
pub use error::{EspnError, Result};
pub use models::{
    ApiModel, ModelCache, ModelIds, Player, ReadOptions, ReadRequest, Readable, Roster,
    SlottedPlayer, Team,
};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
