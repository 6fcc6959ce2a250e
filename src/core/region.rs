//! The fixed set of playable cells.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::hex::{spiral, Hex};

/// A hexagonal region of cells around a center.
///
/// Built once at game creation and never mutated afterwards. Each game owns
/// its own region, so concurrent games never share board geometry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardRegion {
    center: Hex,
    radius: u32,
    /// Cells in spiral order (center outward).
    cells: Vec<Hex>,
    #[serde(skip)]
    lookup: FxHashSet<Hex>,
}

impl BoardRegion {
    /// Build the hexagon of `radius` around `center`.
    #[must_use]
    pub fn hexagon(center: Hex, radius: u32) -> Self {
        let cells = spiral(center, radius);
        let lookup = cells.iter().copied().collect();
        Self {
            center,
            radius,
            cells,
            lookup,
        }
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, cell: Hex) -> bool {
        if self.lookup.is_empty() {
            // Deserialized region: lookup table was skipped.
            return cell.distance(self.center) <= u64::from(self.radius);
        }
        self.lookup.contains(&cell)
    }

    #[must_use]
    pub fn center(&self) -> Hex {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells, center first.
    pub fn cells(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells.iter().copied()
    }
}
