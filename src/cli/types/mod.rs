//! Type-safe wrappers and enums for ESPN Fantasy Football data.

pub mod ids;
pub mod position;

pub use ids::{LeagueId, PlayerId, ScoringPeriodId, SeasonId, TeamId};
pub use position::Position;
