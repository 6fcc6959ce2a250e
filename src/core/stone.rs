//! Stones and their stable identities.
//!
//! Stones live in an arena (`Vec<Stone>`) for the whole game. A `StoneId` is
//! an index into that arena and never changes: moves and swaps only rewrite
//! a stone's `color` and `position` in place.

use serde::{Deserialize, Serialize};

use super::hex::Hex;

/// Stone colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneColor {
    White,
    Black,
}

impl StoneColor {
    /// The other colour.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            StoneColor::White => StoneColor::Black,
            StoneColor::Black => StoneColor::White,
        }
    }
}

impl std::fmt::Display for StoneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoneColor::White => write!(f, "white"),
            StoneColor::Black => write!(f, "black"),
        }
    }
}

/// A stone: a colour at a cell.
///
/// Also used as a value snapshot in move records, where equality of both
/// fields is what matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub color: StoneColor,
    pub position: Hex,
}

impl Stone {
    #[must_use]
    pub const fn new(color: StoneColor, position: Hex) -> Self {
        Self { color, position }
    }

    /// Same stone, different cell.
    #[must_use]
    pub const fn at(self, position: Hex) -> Self {
        Self { position, ..self }
    }

    /// Same cell, different colour.
    #[must_use]
    pub const fn colored(self, color: StoneColor) -> Self {
        Self { color, ..self }
    }
}

/// Stable arena index of a stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoneId(pub u16);

impl StoneId {
    /// Most stones an arena can index.
    pub const MAX_COUNT: usize = u16::MAX as usize + 1;

    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// The ID for arena position `index`, if it is addressable.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// Position in the stone arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stone({})", self.0)
    }
}
