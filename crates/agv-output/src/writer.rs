//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, TickMetricsRow};

/// A sink for simulation output rows.
///
/// Errors are reported per call; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one per-tick KPI row.
    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
