//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use agv_core::Tick;
use agv_fleet::AgentStore;
use agv_sim::{SimObserver, TickReport};

use crate::row::{AgentSnapshotRow, TickMetricsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one KPI row per tick and agent snapshots
/// at the configured interval to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run_to_end` does this via `on_sim_end`; call it
    /// after plain `step_with` batches.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let m = &report.metrics;
        let row = TickMetricsRow {
            tick:           m.time,
            tasks_done:     m.tasks_done,
            collisions:     m.collisions,
            distance_total: m.distance_total,
            utilization:    m.utilization,
        };
        let result = self.writer.write_tick_metrics(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, time: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow {
                tick:         time.0,
                agent_id:     a.id.0,
                row:          a.position.row,
                col:          a.position.col,
                active_ticks: a.active_ticks,
                distance:     a.distance_travelled,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
