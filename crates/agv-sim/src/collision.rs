//! Collision detection and the one-tick wait policy.
//!
//! After movement, agents sharing a cell are grouped.  For a group of `k`
//! agents the cumulative counter grows by `k - 1`.  The lowest-id agent in
//! the group is left alone; every other member gets its current cell pushed
//! onto the front of its route, so its next tick is a wait.  Nobody is moved
//! back: the overlap that caused the collision stands.

use agv_core::{AgentId, Coord};
use agv_fleet::AgentStore;

use crate::CellMap;

/// Agents found sharing one cell at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub cell: Coord,
    /// Ascending id order; `agents[0]` is the one left unaffected.
    pub agents: Vec<AgentId>,
}

impl Collision {
    /// Contribution to the cumulative collision counter (`k - 1`).
    #[inline]
    pub fn overlap(&self) -> u64 {
        self.agents.len().saturating_sub(1) as u64
    }

    /// The agents forced to wait.
    pub fn held(&self) -> &[AgentId] {
        self.agents.get(1..).unwrap_or(&[])
    }
}

/// Detect collisions and apply the wait policy.
///
/// Returned collisions are sorted by cell so reports are stable.
pub fn resolve(agents: &mut AgentStore) -> Vec<Collision> {
    let mut by_cell: CellMap<Vec<AgentId>> = CellMap::default();
    for agent in agents.iter() {
        by_cell.entry(agent.position).or_default().push(agent.id);
    }

    let mut collisions: Vec<Collision> = by_cell
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(cell, agents)| Collision { cell, agents })
        .collect();
    collisions.sort_by_key(|c| c.cell);

    for collision in &collisions {
        for &id in collision.held() {
            if let Some(agent) = agents.get_mut(id) {
                agent.hold_position();
            }
        }
    }
    collisions
}
