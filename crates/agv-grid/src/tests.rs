//! Unit tests for agv-grid.
//!
//! All tests use hand-built grids so expected routes can be asserted exactly.

#[cfg(test)]
mod helpers {
    use std::collections::HashSet;

    use agv_core::Coord;

    pub fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    pub fn blocked(cells: &[(i32, i32)]) -> HashSet<Coord> {
        cells.iter().map(|&(r, col)| c(r, col)).collect()
    }

    /// Every consecutive pair of cells must be 4-adjacent.
    pub fn assert_connected(cells: &[Coord]) {
        for pair in cells.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "non-adjacent hop {} → {}", pair[0], pair[1]);
        }
    }
}

// ── Grid & neighbours ─────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::helpers::c;
    use crate::{Grid, GridBounds};

    #[test]
    fn interior_cell_has_four_neighbors() {
        let b = GridBounds::new(5, 5);
        let n: Vec<_> = b.neighbors(c(2, 2)).collect();
        assert_eq!(n, vec![c(3, 2), c(1, 2), c(2, 3), c(2, 1)]);
    }

    #[test]
    fn corner_cells_are_clipped() {
        let b = GridBounds::new(3, 4);
        assert_eq!(b.neighbors(c(0, 0)).collect::<Vec<_>>(), vec![c(1, 0), c(0, 1)]);
        assert_eq!(b.neighbors(c(2, 3)).collect::<Vec<_>>(), vec![c(1, 3), c(2, 2)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(GridBounds::new(1, 1).neighbors(c(0, 0)).count(), 0);
    }

    #[test]
    fn out_of_range_query_yields_only_in_range_cells() {
        let b = GridBounds::new(3, 3);
        let n: Vec<_> = b.neighbors(c(-1, 0)).collect();
        assert_eq!(n, vec![c(0, 0)]);
        assert_eq!(b.neighbors(c(10, 10)).count(), 0);
    }

    #[test]
    fn grid_membership() {
        let g = Grid::new(4, 4, [c(1, 1), c(1, 1)], [c(2, 2)]);
        assert_eq!(g.obstacles.len(), 1, "duplicates collapse");
        assert!(g.is_obstacle(c(1, 1)));
        assert!(!g.is_obstacle(c(2, 2)));
        assert!(g.is_shelf(c(2, 2)));
        assert!(g.contains(c(3, 3)));
        assert!(!g.contains(c(4, 0)));
        assert_eq!(g.neighbors(c(0, 0)).count(), 2);
    }
}

// ── A* routing ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use std::collections::{BTreeSet, HashSet};

    use agv_core::Coord;

    use super::helpers::{assert_connected, blocked, c};
    use crate::{AStarRouter, GridBounds, Router, plan_path};

    #[test]
    fn same_start_and_goal_is_single_cell() {
        let route = plan_path(&HashSet::new(), GridBounds::new(3, 3), c(1, 1), c(1, 1)).unwrap();
        assert_eq!(route.cells, vec![c(1, 1)]);
        assert_eq!(route.hops(), 0);
    }

    #[test]
    fn open_grid_length_is_manhattan_plus_one() {
        let bounds = GridBounds::new(12, 12);
        let empty: HashSet<Coord> = HashSet::new();
        for (a, b) in [
            (c(0, 0), c(11, 11)),
            (c(1, 1), c(10, 10)),
            (c(5, 7), c(5, 0)),
            (c(9, 2), c(0, 2)),
            (c(3, 8), c(6, 1)),
        ] {
            let route = plan_path(&empty, bounds, a, b).unwrap();
            assert_eq!(route.len(), 1 + a.manhattan(b) as usize, "{a} → {b}");
            assert_eq!(route.cells.first(), Some(&a));
            assert_eq!(route.cells.last(), Some(&b));
            assert_connected(&route.cells);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let bounds = GridBounds::new(10, 10);
        let walls = blocked(&[(2, 2), (2, 3), (2, 4), (5, 5), (6, 5), (7, 5)]);
        let first = plan_path(&walls, bounds, c(0, 0), c(9, 9)).unwrap();
        for _ in 0..10 {
            assert_eq!(plan_path(&walls, bounds, c(0, 0), c(9, 9)).unwrap(), first);
        }
    }

    #[test]
    fn tie_break_prefers_lowest_cell() {
        // Two equally short routes from (0,0) to (1,1): via (0,1) or via (1,0).
        // (f, g, cell) ordering pops (0,1) before (1,0) at equal f and g.
        let route = plan_path(&HashSet::new(), GridBounds::new(2, 2), c(0, 0), c(1, 1)).unwrap();
        assert_eq!(route.cells, vec![c(0, 0), c(0, 1), c(1, 1)]);
    }

    #[test]
    fn detours_around_wall() {
        // Wall across row 1 except column 4.
        let walls = blocked(&[(1, 0), (1, 1), (1, 2), (1, 3)]);
        let route = plan_path(&walls, GridBounds::new(3, 5), c(0, 0), c(2, 0)).unwrap();
        assert_connected(&route.cells);
        assert!(route.cells.contains(&c(1, 4)));
        assert_eq!(route.len(), 11); // 4 right, 2 down, 4 left + start
        assert!(route.cells.iter().all(|cell| !walls.contains(cell)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let walls = blocked(&[(4, 5), (6, 5), (5, 4), (5, 6)]);
        assert!(plan_path(&walls, GridBounds::new(10, 10), c(0, 0), c(5, 5)).is_none());
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let walls = blocked(&[(2, 2)]);
        assert!(plan_path(&walls, GridBounds::new(4, 4), c(0, 0), c(2, 2)).is_none());
    }

    #[test]
    fn blocked_start_does_not_prevent_departure() {
        let walls = blocked(&[(0, 0)]);
        let route = plan_path(&walls, GridBounds::new(3, 3), c(0, 0), c(0, 2)).unwrap();
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn off_grid_endpoints_yield_none() {
        let empty: HashSet<Coord> = HashSet::new();
        assert!(plan_path(&empty, GridBounds::new(3, 3), c(0, 0), c(3, 0)).is_none());
        assert!(plan_path(&empty, GridBounds::new(3, 3), c(-1, 0), c(2, 2)).is_none());
    }

    #[test]
    fn blocked_set_is_not_mutated() {
        let walls = blocked(&[(1, 1), (1, 2)]);
        let before = walls.clone();
        let _ = plan_path(&walls, GridBounds::new(4, 4), c(0, 0), c(3, 3));
        assert_eq!(walls, before);
    }

    #[test]
    fn router_trait_matches_free_function() {
        let walls: BTreeSet<Coord> = [c(1, 1), c(2, 1)].into_iter().collect();
        let bounds = GridBounds::new(5, 5);
        let via_trait = AStarRouter.route(&walls, bounds, c(0, 0), c(4, 4));
        let direct = plan_path(&walls, bounds, c(0, 0), c(4, 4));
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn huge_grid_plans_short_route() {
        let empty: HashSet<Coord> = HashSet::new();
        let route = plan_path(&empty, GridBounds::new(200_000, 200_000), c(0, 2), c(0, 4)).unwrap();
        assert_eq!(route.cells, vec![c(0, 2), c(0, 3), c(0, 4)]);

        let walls = blocked(&[(0, 3)]);
        let bounds = GridBounds::new(i32::MAX, i32::MAX);
        let route = plan_path(&walls, bounds, c(0, 2), c(0, 4)).unwrap();
        assert_eq!(route.hops(), 4);
        assert_connected(&route.cells);
    }

    #[test]
    fn far_corner_of_max_grid_is_reachable_in_a_line() {
        // A straight corridor: the heuristic keeps the search on the line.
        let top = i32::MAX - 1;
        let bounds = GridBounds::new(i32::MAX, 3);
        let route = plan_path(&HashSet::new(), bounds, c(top - 5, 1), c(top, 1)).unwrap();
        assert_eq!(route.hops(), 5);
        assert_eq!(route.cells.last(), Some(&c(top, 1)));
    }

    #[test]
    fn fx_hash_set_is_accepted() {
        let mut walls = rustc_hash::FxHashSet::default();
        walls.insert(c(0, 1));
        let route = plan_path(&walls, GridBounds::new(2, 2), c(0, 0), c(1, 1)).unwrap();
        assert_eq!(route.cells, vec![c(0, 0), c(1, 0), c(1, 1)]);
    }
}
