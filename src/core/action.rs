//! Move representation.
//!
//! A turn acts on a *pair* of stones and resolves to one of two placements:
//! - `Swap`: the two stones exchange colours in place
//! - `Slide`: both stones translate one step in the same direction
//!
//! Every committed turn is stored as a `MoveRecord` holding value snapshots
//! of both stones before and after. The same record type describes candidate
//! moves during validation, so the anti-repetition check compares like with
//! like.

use serde::{Deserialize, Serialize};

use super::hex::{Direction, Hex};
use super::stone::{Stone, StoneId};

/// Snapshot of the two stones of a pair, first-picked stone first.
pub type StonePair = [Stone; 2];

/// How a selected pair was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Colours exchanged, positions unchanged.
    Swap,
    /// Both stones moved one step in `direction`.
    Slide { direction: Direction },
}

/// A completed (or candidate) turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Arena indices of the pair, first-picked first.
    pub stones: [StoneId; 2],

    /// The pair immediately before the move.
    pub src: StonePair,

    /// The pair immediately after the move, index-aligned with `src`.
    pub dest: StonePair,

    pub placement: Placement,
}

impl MoveRecord {
    /// Whether `self` exactly undoes `previous`: its `src` is `previous.dest`
    /// and its `dest` is `previous.src`, each compared as an unordered pair.
    #[must_use]
    pub fn reverses(&self, previous: &MoveRecord) -> bool {
        same_pair(&self.src, &previous.dest) && same_pair(&self.dest, &previous.src)
    }

    /// The record with `src` and `dest` exchanged.
    #[must_use]
    pub fn inverse(&self) -> MoveRecord {
        MoveRecord {
            src: self.dest,
            dest: self.src,
            ..*self
        }
    }
}

fn same_pair(a: &StonePair, b: &StonePair) -> bool {
    (a[0] == b[0] && a[1] == b[1]) || (a[0] == b[1] && a[1] == b[0])
}

/// A whole turn expressed as the three clicks that play it: two picks and a
/// placement target. This is what the move enumerator hands to agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullMove {
    /// Cell of the first-picked stone.
    pub first: Hex,
    /// Cell of the second-picked stone.
    pub second: Hex,
    /// Placement click.
    pub target: Hex,
}

impl FullMove {
    #[must_use]
    pub const fn new(first: Hex, second: Hex, target: Hex) -> Self {
        Self {
            first,
            second,
            target,
        }
    }
}

impl std::fmt::Display for FullMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.first, self.second, self.target)
    }
}
