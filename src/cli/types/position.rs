//! Fantasy football positions and lineup slots.

use serde::{Serialize, Serializer};
use std::fmt;

/// A lineup slot or player position.
///
/// ESPN reports two different id spaces: the lineup slot a player occupies
/// on a roster (`slotCategoryId`, also used for `eligibleSlotCategoryIds`)
/// and the player's natural position (`defaultPositionId`). Both map onto
/// this enum; ids neither table knows are kept as [`Position::Unknown`].
///
/// # Examples
///
/// ```rust
/// use espn_ffl_models::Position;
///
/// assert_eq!(Position::from_slot_id(20), Position::BE);
/// assert_eq!(Position::from_default_position_id(3), Position::WR);
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    TQB,
    RB,
    RbWr,
    WR,
    WrTe,
    TE,
    OP,
    DT,
    DE,
    LB,
    DL,
    CB,
    S,
    DB,
    DP,
    DEF,
    K,
    P,
    HC,
    BE,
    IR,
    FLEX,
    Unknown(u8),
}

impl Position {
    /// Map an ESPN lineup slot id (`slotCategoryId`) to a position.
    pub fn from_slot_id(id: u8) -> Self {
        match id {
            0 => Position::QB,
            1 => Position::TQB,
            2 => Position::RB,
            3 => Position::RbWr,
            4 => Position::WR,
            5 => Position::WrTe,
            6 => Position::TE,
            7 => Position::OP,
            8 => Position::DT,
            9 => Position::DE,
            10 => Position::LB,
            11 => Position::DL,
            12 => Position::CB,
            13 => Position::S,
            14 => Position::DB,
            15 => Position::DP,
            16 => Position::DEF,
            17 => Position::K,
            18 => Position::P,
            19 => Position::HC,
            20 => Position::BE,
            21 => Position::IR,
            23 => Position::FLEX,
            other => Position::Unknown(other),
        }
    }

    /// Map a player's `defaultPositionId` to a position.
    pub fn from_default_position_id(id: u8) -> Self {
        match id {
            1 => Position::QB,
            2 => Position::RB,
            3 => Position::WR,
            4 => Position::TE,
            5 => Position::K,
            7 => Position::P,
            9 => Position::DT,
            10 => Position::DE,
            11 => Position::LB,
            12 => Position::CB,
            13 => Position::S,
            14 => Position::HC,
            16 => Position::DEF,
            other => Position::Unknown(other),
        }
    }

    /// True for slots whose players do not score for the team (bench, IR).
    pub fn is_reserve(&self) -> bool {
        matches!(self, Position::BE | Position::IR)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::TQB => "TQB",
            Position::RB => "RB",
            Position::RbWr => "RB/WR",
            Position::WR => "WR",
            Position::WrTe => "WR/TE",
            Position::TE => "TE",
            Position::OP => "OP",
            Position::DT => "DT",
            Position::DE => "DE",
            Position::LB => "LB",
            Position::DL => "DL",
            Position::CB => "CB",
            Position::S => "S",
            Position::DB => "DB",
            Position::DP => "DP",
            Position::DEF => "D/ST",
            Position::K => "K",
            Position::P => "P",
            Position::HC => "HC",
            Position::BE => "Bench",
            Position::IR => "IR",
            Position::FLEX => "FLEX",
            Position::Unknown(id) => return write!(f, "Unknown({})", id),
        };
        write!(f, "{}", s)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_mappings() {
        assert_eq!(Position::from_slot_id(0), Position::QB);
        assert_eq!(Position::from_slot_id(2), Position::RB);
        assert_eq!(Position::from_slot_id(3), Position::RbWr);
        assert_eq!(Position::from_slot_id(4), Position::WR);
        assert_eq!(Position::from_slot_id(6), Position::TE);
        assert_eq!(Position::from_slot_id(16), Position::DEF);
        assert_eq!(Position::from_slot_id(17), Position::K);
        assert_eq!(Position::from_slot_id(20), Position::BE);
        assert_eq!(Position::from_slot_id(21), Position::IR);
        assert_eq!(Position::from_slot_id(23), Position::FLEX);

        // 22 is unused by ESPN
        assert_eq!(Position::from_slot_id(22), Position::Unknown(22));
    }

    #[test]
    fn test_default_position_id_mappings() {
        assert_eq!(Position::from_default_position_id(1), Position::QB);
        assert_eq!(Position::from_default_position_id(2), Position::RB);
        assert_eq!(Position::from_default_position_id(3), Position::WR);
        assert_eq!(Position::from_default_position_id(4), Position::TE);
        assert_eq!(Position::from_default_position_id(5), Position::K);
        assert_eq!(Position::from_default_position_id(16), Position::DEF);
        assert_eq!(Position::from_default_position_id(0), Position::Unknown(0));
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::RbWr.to_string(), "RB/WR");
        assert_eq!(Position::DEF.to_string(), "D/ST");
        assert_eq!(Position::BE.to_string(), "Bench");
        assert_eq!(Position::Unknown(99).to_string(), "Unknown(99)");
    }

    #[test]
    fn test_position_serializes_as_label() {
        let json = serde_json::to_value(Position::WrTe).unwrap();
        assert_eq!(json, serde_json::json!("WR/TE"));
    }

    #[test]
    fn test_reserve_slots() {
        assert!(Position::BE.is_reserve());
        assert!(Position::IR.is_reserve());
        assert!(!Position::FLEX.is_reserve());
    }
}
