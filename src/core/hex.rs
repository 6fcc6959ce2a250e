//! Axial hex coordinates.
//!
//! ## Layout
//!
//! Cells are addressed by `(q, r)` on a pointy-top grid. The implicit third
//! cube coordinate is `s = -q - r`. Unit directions:
//!
//! ```text
//!        NW (0,-1)   NE (+1,-1)
//!   W (-1,0)     *     E (+1,0)
//!        SW (-1,+1)  SE (0,+1)
//! ```
//!
//! Everything here is pure and total over `i32` coordinates: stepping past
//! the edge of the integer range wraps instead of panicking, and distances
//! are computed in `i64`. Bounds are the business of `BoardRegion`, and
//! `BoardConfig` keeps every board far from the wrap point.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// An axial hex coordinate. Also used as an offset between two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex distance: `max(|dq|, |dr|, |dq + dr|)`.
    ///
    /// ```
    /// use paradox_engine::core::Hex;
    ///
    /// assert_eq!(Hex::new(0, 0).distance(Hex::new(2, -1)), 2);
    /// assert_eq!(Hex::new(3, 3).distance(Hex::new(3, 3)), 0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Hex) -> u64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }

    /// The adjacent cell in `direction`.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction.offset()
    }

    /// Multiply an offset by a scalar.
    #[must_use]
    pub const fn scale(self, k: i32) -> Hex {
        Hex::new(self.q.wrapping_mul(k), self.r.wrapping_mul(k))
    }

    /// Iterate over the six neighbours in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::ALL.into_iter().map(move |d| self.neighbor(d))
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q.wrapping_add(rhs.q), self.r.wrapping_add(rhs.r))
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q.wrapping_sub(rhs.q), self.r.wrapping_sub(rhs.r))
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex::new(self.q.wrapping_neg(), self.r.wrapping_neg())
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// The six unit directions of a pointy-top hex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NE,
    E,
    SE,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, clockwise from north-east. Scans that must be
    /// deterministic (win detection, enumeration) use this order.
    pub const ALL: [Direction; 6] = [
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit offset for this direction.
    #[must_use]
    pub const fn offset(self) -> Hex {
        match self {
            Direction::NE => Hex::new(1, -1),
            Direction::E => Hex::new(1, 0),
            Direction::SE => Hex::new(0, 1),
            Direction::SW => Hex::new(-1, 1),
            Direction::W => Hex::new(-1, 0),
            Direction::NW => Hex::new(0, -1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// Recover a direction from a unit offset. `None` for anything else.
    #[must_use]
    pub fn from_offset(offset: Hex) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.offset() == offset)
    }
}

/// `length` cells starting at `start` and stepping by `direction`.
///
/// No bounds filtering: callers check region membership themselves.
pub fn line(start: Hex, direction: Direction, length: usize) -> impl Iterator<Item = Hex> {
    let step = direction.offset();
    std::iter::successors(Some(start), move |&cell| Some(cell + step)).take(length)
}

/// The cells at exactly `radius` from `center`, walked clockwise starting
/// from the eastern corner. `radius == 0` yields just the center.
pub fn ring(center: Hex, radius: u32) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }

    // Side directions, clockwise from the E corner.
    const SIDES: [Direction; 6] = [
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::NE,
        Direction::E,
        Direction::SE,
    ];

    let mut cells = Vec::with_capacity(6 * radius as usize);
    let mut cursor = Hex::new(center.q.wrapping_add_unsigned(radius), center.r);
    for side in SIDES {
        for _ in 0..radius {
            cells.push(cursor);
            cursor = cursor.neighbor(side);
        }
    }
    cells
}

/// All cells within `radius` of `center`: the center first, then each ring
/// outward.
pub fn spiral(center: Hex, radius: u32) -> Vec<Hex> {
    (0..=radius).flat_map(|k| ring(center, k)).collect()
}

/// Number of cells in a hexagon of the given radius: `3r(r+1) + 1`.
#[must_use]
pub const fn hexagon_cell_count(radius: u32) -> usize {
    let r = radius as usize;
    3usize.saturating_mul(r).saturating_mul(r + 1).saturating_add(1)
}
