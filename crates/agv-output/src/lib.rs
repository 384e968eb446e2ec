//! `agv-output` — simulation output writers for the AGV simulator.
//!
//! | Writer       | Files created                                 |
//! |--------------|-----------------------------------------------|
//! | [`CsvWriter`] | `agent_snapshots.csv`, `tick_metrics.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `agv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use agv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_to_end(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickMetricsRow};
pub use writer::OutputWriter;
