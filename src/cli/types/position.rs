//! Fantasy football positions and lineup slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's default (roster-independent) position.
///
/// ESPN reports this as `defaultPositionId` on the player record. Ids that do
/// not map to a standard position are kept as `Other` so a stray IDP or
/// head-coach entry never aborts ingestion.
///
/// # Examples
///
/// ```rust
/// use league_recap::Position;
///
/// assert_eq!(Position::from_espn_id(2), Position::RB);
/// assert_eq!(Position::from_espn_id(16).to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    Other(i16),
}

impl Position {
    /// Map an ESPN `defaultPositionId` to a position.
    pub fn from_espn_id(id: i16) -> Self {
        match id {
            0 | 1 => Position::QB, // ESPN uses both 0 and 1 for QB
            2 => Position::RB,
            3 => Position::WR,
            4 | 6 => Position::TE,
            5 | 17 => Position::K,
            16 => Position::DEF,
            other => Position::Other(other),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::QB => write!(f, "QB"),
            Position::RB => write!(f, "RB"),
            Position::WR => write!(f, "WR"),
            Position::TE => write!(f, "TE"),
            Position::K => write!(f, "K"),
            Position::DEF => write!(f, "D/ST"),
            Position::Other(id) => write!(f, "POS{}", id),
        }
    }
}

/// Where a player sat in a team's lineup for a given week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineupSlot {
    QB,
    RB,
    WR,
    TE,
    Flex,
    DEF,
    K,
    Bench,
    IR,
    Other(u8),
}

impl LineupSlot {
    /// Map an ESPN `lineupSlotId` to a slot.
    pub fn from_espn_id(id: u8) -> Self {
        match id {
            0 => LineupSlot::QB,
            2 => LineupSlot::RB,
            4 => LineupSlot::WR,
            6 => LineupSlot::TE,
            16 => LineupSlot::DEF,
            17 => LineupSlot::K,
            20 => LineupSlot::Bench,
            21 => LineupSlot::IR,
            23 => LineupSlot::Flex,
            other => LineupSlot::Other(other),
        }
    }

    /// Only the bench slot counts as benched; IR and every starting slot do not.
    pub fn is_bench(&self) -> bool {
        matches!(self, LineupSlot::Bench)
    }

    /// Whether the slot contributes to the team's weekly score.
    pub fn is_starting(&self) -> bool {
        !matches!(self, LineupSlot::Bench | LineupSlot::IR)
    }
}

impl fmt::Display for LineupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupSlot::QB => write!(f, "QB"),
            LineupSlot::RB => write!(f, "RB"),
            LineupSlot::WR => write!(f, "WR"),
            LineupSlot::TE => write!(f, "TE"),
            LineupSlot::Flex => write!(f, "RB/WR/TE"),
            LineupSlot::DEF => write!(f, "D/ST"),
            LineupSlot::K => write!(f, "K"),
            LineupSlot::Bench => write!(f, "BE"),
            LineupSlot::IR => write!(f, "IR"),
            LineupSlot::Other(id) => write!(f, "SLOT{}", id),
        }
    }
}
