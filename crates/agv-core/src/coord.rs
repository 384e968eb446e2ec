//! Grid cell coordinate.
//!
//! `Coord` is a plain `(row, col)` pair.  Signed components let validation
//! report a negative cell as out of range instead of failing to parse it.
//! The derived `Ord` (row first, then col) is what the pathfinder uses for
//! deterministic tie-breaking, so field order matters.

use std::fmt;

/// A 0-indexed grid cell.  Valid cells satisfy `row ∈ [0, rows)` and
/// `col ∈ [0, cols)` for the grid they are used on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance — the exact shortest-path length on an empty
    /// 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col))
    }

    /// Cell offset by `(dr, dc)`.  No bounds check.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Coord {
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
