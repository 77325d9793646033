//! ID types for ESPN Fantasy Football.
//!
//! Every identifier the API hands out is a plain integer on the wire; these
//! wrappers keep a league id from being passed where a team id is expected.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $as_fn:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn new(id: $inner) -> Self {
                Self(id)
            }

            pub fn $as_fn(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = EspnError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

id_type!(
    /// Type-safe wrapper for ESPN Fantasy Football League IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use espn_ffl_models::LeagueId;
    ///
    /// let league_id = LeagueId::new(123456);
    /// assert_eq!(league_id.as_u32(), 123456);
    /// assert_eq!(league_id.to_string(), "123456");
    /// ```
    LeagueId(u32),
    as_u32
);

id_type!(
    /// Season year (e.g. 2018).
    SeasonId(u16),
    as_u16
);

id_type!(
    /// Fantasy team ID, unique within a league.
    TeamId(u16),
    as_u16
);

id_type!(
    /// Scoring period (week) within a season.
    ScoringPeriodId(u16),
    as_u16
);

id_type!(PlayerId(u64), as_u64);
