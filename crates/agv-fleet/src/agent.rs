//! A single AGV.

use std::collections::VecDeque;

use agv_core::{AgentId, Coord, OrderId};
use agv_grid::Route;

/// What one call to [`Agent::advance_one_tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Empty route; nothing happened.
    Idle,
    /// Popped a hop equal to the current cell (a forced wait).
    Waited,
    /// Moved to a different cell.
    Moved,
}

/// One vehicle.
///
/// `route` is private: only [`set_route`](Self::set_route),
/// [`advance_one_tick`](Self::advance_one_tick) and
/// [`hold_position`](Self::hold_position) mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id:       AgentId,
    pub position: Coord,

    /// Order whose cargo this agent picked up, if any.
    pub carrying: Option<OrderId>,

    /// Ticks on which the position actually changed.
    pub distance_travelled: u64,

    /// Ticks on which a hop was consumed (moves and waits alike).
    pub active_ticks: u64,

    route: VecDeque<Coord>,
}

impl Agent {
    /// A fresh idle agent at `start`.
    pub fn new(id: AgentId, start: Coord) -> Self {
        Self {
            id,
            position:           start,
            carrying:           None,
            distance_travelled: 0,
            active_ticks:       0,
            route:              VecDeque::new(),
        }
    }

    /// `true` if the route is empty.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.route.is_empty()
    }

    /// Remaining hops, front first.
    pub fn route(&self) -> impl ExactSizeIterator<Item = &Coord> {
        self.route.iter()
    }

    /// Next hop, if any.
    #[inline]
    pub fn next_hop(&self) -> Option<Coord> {
        self.route.front().copied()
    }

    /// Replace the current route.
    ///
    /// A leading cell equal to the current position is dropped: the route
    /// holds future hops only.  `None` or an empty route leaves the agent
    /// idle.
    pub fn set_route(&mut self, route: Option<Route>) {
        self.route = route.map(|r| VecDeque::from(r.cells)).unwrap_or_default();
        if self.route.front() == Some(&self.position) {
            self.route.pop_front();
        }
    }

    /// Consume one hop.
    pub fn advance_one_tick(&mut self) -> StepOutcome {
        let Some(next) = self.route.pop_front() else {
            return StepOutcome::Idle;
        };
        let outcome = if next != self.position {
            self.distance_travelled += 1;
            StepOutcome::Moved
        } else {
            StepOutcome::Waited
        };
        self.active_ticks += 1;
        self.position = next;
        outcome
    }

    /// Force the next tick to be a wait by re-queueing the current cell at
    /// the front of the route.
    pub fn hold_position(&mut self) {
        self.route.push_front(self.position);
    }
}
