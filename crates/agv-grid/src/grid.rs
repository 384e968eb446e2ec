//! Static warehouse floor: bounds, obstacles, and shelves.

use std::collections::BTreeSet;

use agv_core::Coord;

/// Axis-aligned moves in the order neighbours are expanded: down, up,
/// right, left.  The order is part of the pathfinder's determinism.
const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// ── GridBounds ────────────────────────────────────────────────────────────────

/// `rows × cols` extent of the floor.  All a route search needs besides the
/// blocked set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub rows: i32,
    pub cols: i32,
}

impl GridBounds {
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// `true` if `cell` lies in `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Up to four 4-connected neighbours of `cell` that stay inside the grid.
    ///
    /// Cells at the boundary simply yield fewer neighbours.
    pub fn neighbors(self, cell: Coord) -> impl Iterator<Item = Coord> {
        STEPS
            .into_iter()
            .map(move |(dr, dc)| cell.offset(dr, dc))
            .filter(move |&n| self.contains(n))
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The static floor plan.
///
/// Obstacles are impassable.  Shelves are reserved cells that agents may
/// still drive through; they are kept so snapshots can render them.
///
/// Cell sets are `BTreeSet`s so iteration (and therefore every snapshot)
/// comes out in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows:      i32,
    pub cols:      i32,
    pub obstacles: BTreeSet<Coord>,
    pub shelves:   BTreeSet<Coord>,
}

impl Grid {
    /// Build a grid.  Callers validate coordinates beforehand; duplicates in
    /// the input lists collapse.
    pub fn new(
        rows:      i32,
        cols:      i32,
        obstacles: impl IntoIterator<Item = Coord>,
        shelves:   impl IntoIterator<Item = Coord>,
    ) -> Self {
        Self {
            rows,
            cols,
            obstacles: obstacles.into_iter().collect(),
            shelves:   shelves.into_iter().collect(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.rows, self.cols)
    }

    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        self.bounds().contains(cell)
    }

    #[inline]
    pub fn is_obstacle(&self, cell: Coord) -> bool {
        self.obstacles.contains(&cell)
    }

    #[inline]
    pub fn is_shelf(&self, cell: Coord) -> bool {
        self.shelves.contains(&cell)
    }

    /// In-bounds neighbours of `cell`, obstacles included.
    pub fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> + use<> {
        self.bounds().neighbors(cell)
    }
}
