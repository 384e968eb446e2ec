//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_metrics.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickMetricsRow};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const METRICS_FILE: &str = "tick_metrics.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    metrics:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["tick", "agent_id", "row", "col", "active_ticks", "distance"])?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record(["tick", "tasks_done", "collisions", "distance_total", "utilization"])?;

        Ok(Self { snapshots, metrics, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.active_ticks.to_string(),
                row.distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.tasks_done.to_string(),
            row.collisions.to_string(),
            row.distance_total.to_string(),
            format!("{:.4}", row.utilization),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
