//! Fleet storage: every agent, ordered by id.
//!
//! `AgentId(n)` lives at index `n - 1`.  Iteration order is id order, which
//! is the order both the dispatcher and the collision resolver rely on.

use agv_core::{AgentId, Coord};

use crate::Agent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// One agent per start cell, ids `1..=starts.len()` in input order.
    pub fn from_starts(starts: &[Coord]) -> Self {
        let agents = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Agent::new(AgentId::from_slot(i), start))
            .collect();
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        if id.0 == 0 {
            return None;
        }
        self.agents.get(id.slot())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        if id.0 == 0 {
            return None;
        }
        self.agents.get_mut(id.slot())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Current cell of every agent, in id order.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.agents.iter().map(|a| a.position)
    }

    /// `true` if any agent currently stands on `cell`.
    pub fn any_at(&self, cell: Coord) -> bool {
        self.agents.iter().any(|a| a.position == cell)
    }

    // ── Aggregate counters ────────────────────────────────────────────────

    pub fn total_distance(&self) -> u64 {
        self.agents.iter().map(|a| a.distance_travelled).sum()
    }

    pub fn total_active_ticks(&self) -> u64 {
        self.agents.iter().map(|a| a.active_ticks).sum()
    }
}

impl<'a> IntoIterator for &'a AgentStore {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
