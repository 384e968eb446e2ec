//! Read-only projections of simulation state handed to outside callers.
//!
//! These are plain serde types: a request layer serializes them as-is, and
//! coordinates come out as `[row, col]` arrays.

use agv_core::{AgentId, Coord, OrderId};
use agv_order::OrderStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id:           AgentId,
    pub pos:          Coord,
    pub active_ticks: u64,
    pub dist:         u64,
    pub carrying:     Option<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub id:     OrderId,
    pub pick:   Coord,
    pub drop:   Coord,
    pub status: OrderStatus,
}

/// Full state: grid, agents (id order), orders (insertion order).
/// Obstacles and shelves are listed in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub time:      u64,
    pub rows:      i32,
    pub cols:      i32,
    pub obstacles: Vec<Coord>,
    pub shelves:   Vec<Coord>,
    pub agents:    Vec<AgentView>,
    pub orders:    Vec<OrderView>,
}

impl StateSnapshot {
    pub fn order(&self, id: &str) -> Option<&OrderView> {
        self.orders.iter().find(|o| o.id.as_str() == id)
    }
}

/// KPIs.  `utilization = Σ active_ticks / (agent_count · max(1, time))`,
/// or `0.0` with no agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub time:           u64,
    pub tasks_total:    usize,
    pub tasks_done:     usize,
    pub collisions:     u64,
    pub distance_total: u64,
    pub utilization:    f64,
}

/// What `step` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub state:   StateSnapshot,
    pub metrics: MetricsSnapshot,
}
