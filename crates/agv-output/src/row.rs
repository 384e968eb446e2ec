//! Plain data row types written by output backends.

/// One agent at one snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    /// Post-tick time the snapshot was taken at.
    pub tick:         u64,
    pub agent_id:     u32,
    pub row:          i32,
    pub col:          i32,
    pub active_ticks: u64,
    pub distance:     u64,
}

/// KPIs after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMetricsRow {
    /// Post-tick time.
    pub tick:           u64,
    pub tasks_done:     usize,
    pub collisions:     u64,
    pub distance_total: u64,
    pub utilization:    f64,
}
