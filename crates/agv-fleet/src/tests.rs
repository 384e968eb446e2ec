//! Unit tests for agv-fleet.

use agv_core::{AgentId, Coord};
use agv_grid::Route;

use crate::{Agent, AgentStore, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

fn route(cells: &[(i32, i32)]) -> Route {
    Route { cells: cells.iter().map(|&(r, col)| c(r, col)).collect() }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn new_agent_is_idle() {
        let a = Agent::new(AgentId(1), c(2, 3));
        assert!(a.is_idle());
        assert_eq!(a.position, c(2, 3));
        assert_eq!(a.carrying, None);
        assert_eq!((a.distance_travelled, a.active_ticks), (0, 0));
    }

    #[test]
    fn set_route_drops_leading_current_cell() {
        let mut a = Agent::new(AgentId(1), c(0, 0));
        a.set_route(Some(route(&[(0, 0), (0, 1), (0, 2)])));
        assert_eq!(a.route().copied().collect::<Vec<_>>(), vec![c(0, 1), c(0, 2)]);
        assert_eq!(a.next_hop(), Some(c(0, 1)));
    }

    #[test]
    fn set_route_keeps_leading_cell_that_differs() {
        let mut a = Agent::new(AgentId(1), c(5, 5));
        a.set_route(Some(route(&[(0, 1), (0, 2)])));
        assert_eq!(a.route().len(), 2);
    }

    #[test]
    fn trivial_or_missing_route_leaves_agent_idle() {
        let mut a = Agent::new(AgentId(1), c(1, 1));
        a.set_route(Some(route(&[(1, 1)])));
        assert!(a.is_idle());
        a.set_route(Some(route(&[(1, 2)])));
        a.set_route(None);
        assert!(a.is_idle());
    }

    #[test]
    fn idle_advance_is_noop() {
        let mut a = Agent::new(AgentId(1), c(1, 1));
        assert_eq!(a.advance_one_tick(), StepOutcome::Idle);
        assert_eq!(a.position, c(1, 1));
        assert_eq!((a.distance_travelled, a.active_ticks), (0, 0));
    }

    #[test]
    fn advance_moves_and_counts() {
        let mut a = Agent::new(AgentId(1), c(0, 0));
        a.set_route(Some(route(&[(0, 0), (1, 0), (2, 0)])));
        assert_eq!(a.advance_one_tick(), StepOutcome::Moved);
        assert_eq!(a.position, c(1, 0));
        assert_eq!(a.advance_one_tick(), StepOutcome::Moved);
        assert_eq!(a.position, c(2, 0));
        assert_eq!(a.advance_one_tick(), StepOutcome::Idle);
        assert_eq!(a.distance_travelled, 2);
        assert_eq!(a.active_ticks, 2);
    }

    #[test]
    fn hold_position_inserts_a_wait() {
        let mut a = Agent::new(AgentId(2), c(0, 0));
        a.set_route(Some(route(&[(0, 1), (0, 2)])));
        a.advance_one_tick();
        a.hold_position();
        assert_eq!(a.next_hop(), Some(c(0, 1)));

        assert_eq!(a.advance_one_tick(), StepOutcome::Waited);
        assert_eq!(a.position, c(0, 1));
        assert_eq!(a.distance_travelled, 1, "a wait is not distance");
        assert_eq!(a.active_ticks, 2, "a wait is still activity");

        assert_eq!(a.advance_one_tick(), StepOutcome::Moved);
        assert_eq!(a.position, c(0, 2));
    }

    #[test]
    fn hold_position_on_idle_agent_costs_one_active_tick() {
        let mut a = Agent::new(AgentId(1), c(3, 3));
        a.hold_position();
        assert!(!a.is_idle());
        assert_eq!(a.advance_one_tick(), StepOutcome::Waited);
        assert!(a.is_idle());
        assert_eq!(a.active_ticks, 1);
        assert_eq!(a.distance_travelled, 0);
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn ids_follow_start_order_from_one() {
        let store = AgentStore::from_starts(&[c(0, 0), c(0, 1), c(4, 4)]);
        assert_eq!(store.len(), 3);
        let ids: Vec<_> = store.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(store.get(AgentId(3)).unwrap().position, c(4, 4));
    }

    #[test]
    fn unknown_ids_are_none() {
        let store = AgentStore::from_starts(&[c(0, 0)]);
        assert!(store.get(AgentId(0)).is_none());
        assert!(store.get(AgentId(2)).is_none());
    }

    #[test]
    fn empty_store() {
        let store = AgentStore::from_starts(&[]);
        assert!(store.is_empty());
        assert_eq!(store.total_distance(), 0);
        assert_eq!(store.positions().count(), 0);
    }

    #[test]
    fn aggregates_sum_over_agents() {
        let mut store = AgentStore::from_starts(&[c(0, 0), c(2, 2)]);
        store.get_mut(AgentId(1)).unwrap().set_route(Some(route(&[(0, 1), (0, 2)])));
        store.get_mut(AgentId(2)).unwrap().hold_position();
        for a in store.iter_mut() {
            a.advance_one_tick();
        }
        assert_eq!(store.total_distance(), 1);
        assert_eq!(store.total_active_ticks(), 2);
        assert!(store.any_at(c(0, 1)));
        assert!(!store.any_at(c(0, 0)));
    }
}
