//! Typed models hydrated from ESPN responses.
//!
//! - `base`: the [`ApiModel`] trait, lookup-or-build and the generic read
//! - `roster`, `team`, `slotted_player`, `player`: the models themselves

pub mod base;
pub mod player;
pub mod roster;
pub mod slotted_player;
pub mod team;

pub use base::{read_model, resolve, ApiModel, ModelIds, ReadRequest, Readable};
pub use player::Player;
pub use roster::{ReadOptions, Roster};
pub use slotted_player::SlottedPlayer;
pub use team::Team;

use crate::core::{IdentityCache, DEFAULT_CAPACITY};

/// One identity cache per cacheable model.
///
/// Owned by the caller and passed by `&mut` to every parse and read, so
/// there is no process-wide state; drop it or call [`clear`](Self::clear)
/// to start over.
#[derive(Debug)]
pub struct ModelCache {
    pub rosters: IdentityCache<Roster>,
    pub teams: IdentityCache<Team>,
    pub slotted_players: IdentityCache<SlottedPlayer>,
    pub players: IdentityCache<Player>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Each entity cache holds at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rosters: IdentityCache::new(Roster::DISPLAY_NAME, capacity),
            teams: IdentityCache::new(Team::DISPLAY_NAME, capacity),
            slotted_players: IdentityCache::new(SlottedPlayer::DISPLAY_NAME, capacity),
            players: IdentityCache::new(Player::DISPLAY_NAME, capacity),
        }
    }

    pub fn clear(&mut self) {
        self.rosters.clear();
        self.teams.clear();
        self.slotted_players.clear();
        self.players.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
            && self.teams.is_empty()
            && self.slotted_players.is_empty()
            && self.players.is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}
