//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! `agv-sim` calls routing via the [`Router`] trait, so applications can swap
//! in custom implementations without touching the orchestrator.  The default
//! [`AStarRouter`] delegates to [`plan_path`].
//!
//! # Cost model
//!
//! Every edge costs 1 and diagonal moves do not exist, so Manhattan distance
//! is an admissible and consistent heuristic.  Route length is measured in
//! cells, start and goal included.
//!
//! Search state is kept in maps keyed by cell, so memory grows with the
//! cells actually explored, never with the grid area.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};
use std::hash::BuildHasher;

use agv_core::Coord;

use crate::grid::GridBounds;

#[cfg(feature = "fx-hash")]
type CellMap<V> = rustc_hash::FxHashMap<Coord, V>;
#[cfg(not(feature = "fx-hash"))]
type CellMap<V> = std::collections::HashMap<Coord, V>;

#[cfg(feature = "fx-hash")]
type CellSet = rustc_hash::FxHashSet<Coord>;
#[cfg(not(feature = "fx-hash"))]
type CellSet = HashSet<Coord>;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: every cell from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Coord>,
}

impl Route {
    /// Number of cells, start and goal included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to follow the route.
    #[inline]
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

}

// ── Blocked cells ─────────────────────────────────────────────────────────────

/// Membership test for the cells a single planning call must avoid.
///
/// Implemented for std hash sets with any hasher (so `rustc-hash` sets work)
/// and for `BTreeSet`.
pub trait BlockedCells {
    fn is_blocked(&self, cell: Coord) -> bool;
}

impl<S: BuildHasher> BlockedCells for HashSet<Coord, S> {
    #[inline]
    fn is_blocked(&self, cell: Coord) -> bool {
        self.contains(&cell)
    }
}

impl BlockedCells for BTreeSet<Coord> {
    #[inline]
    fn is_blocked(&self, cell: Coord) -> bool {
        self.contains(&cell)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be pure: the same inputs always produce the same
/// route, and nothing passed in is mutated.  `None` means the goal cannot be
/// reached given `blocked`; it is a normal planning outcome, not an error.
pub trait Router: Send + Sync {
    fn route(
        &self,
        blocked: &dyn BlockedCells,
        bounds:  GridBounds,
        start:   Coord,
        goal:    Coord,
    ) -> Option<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the 4-connected grid.  See [`plan_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(
        &self,
        blocked: &dyn BlockedCells,
        bounds:  GridBounds,
        start:   Coord,
        goal:    Coord,
    ) -> Option<Route> {
        plan_path(blocked, bounds, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Shortest obstacle-avoiding route from `start` to `goal`.
///
/// - `start == goal` yields the single-cell route `[start]`.
/// - Cells in `blocked` are never entered (the start cell itself is never
///   tested, so an agent's own position may be left in the set).
/// - Frontier entries are ordered by `(f, g, cell)`; with `Coord`'s row-major
///   ordering this makes the result fully deterministic.
/// - Returns `None` if the goal is unreachable or either endpoint lies off
///   the grid.
pub fn plan_path<B: BlockedCells + ?Sized>(
    blocked: &B,
    bounds:  GridBounds,
    start:   Coord,
    goal:    Coord,
) -> Option<Route> {
    if start == goal {
        return Some(Route { cells: vec![start] });
    }
    if !bounds.contains(start) || !bounds.contains(goal) {
        return None;
    }

    // g[v] = best known cost to reach v; came[v] = predecessor on that path.
    let mut g: CellMap<u32> = CellMap::default();
    let mut came: CellMap<Coord> = CellMap::default();
    let mut closed = CellSet::default();

    g.insert(start, 0);

    // Min-heap on (f, g, cell).  Reverse turns BinaryHeap's max-heap around.
    // f is widened so g + h cannot overflow on very large grids.
    let mut heap: BinaryHeap<Reverse<(u64, u32, Coord)>> = BinaryHeap::new();
    heap.push(Reverse((u64::from(start.manhattan(goal)), 0, start)));

    while let Some(Reverse((_, cost, cur))) = heap.pop() {
        if !closed.insert(cur) {
            continue;
        }
        if cur == goal {
            return Some(reconstruct(&came, goal));
        }

        for next in bounds.neighbors(cur) {
            if blocked.is_blocked(next) {
                continue;
            }
            let new_g = cost + 1;
            if g.get(&next).is_none_or(|&known| new_g < known) {
                g.insert(next, new_g);
                came.insert(next, cur);
                let f = u64::from(new_g) + u64::from(next.manhattan(goal));
                heap.push(Reverse((f, new_g, next)));
            }
        }
    }

    None
}

fn reconstruct(came: &CellMap<Coord>, goal: Coord) -> Route {
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came.get(&cur) {
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Route { cells }
}
