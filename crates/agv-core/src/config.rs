//! Reset-time simulation configuration.

use crate::{Coord, CoreError, CoreResult};

/// Everything `reset` needs to rebuild the simulation from scratch.
///
/// Typically deserialized from a TOML scenario by the application crate, or
/// produced by a request layer.  Missing fields fall back to [`Default`]:
/// a 12×12 grid with one AGV at `(0, 0)` and a 300-tick cap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub rows: i32,
    pub cols: i32,

    /// One AGV per entry; the i-th entry becomes `AgentId(i + 1)`.
    pub agv_starts: Vec<Coord>,

    /// Impassable cells.
    pub obstacles: Vec<Coord>,

    /// Reserved cells.  Passable; carried through to state snapshots only.
    pub shelves: Vec<Coord>,

    /// Hard cap on the tick counter.
    pub max_steps: u64,

    /// Observers receive a full agent snapshot every N ticks.  0 disables
    /// snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows:                  12,
            cols:                  12,
            agv_starts:            vec![Coord::new(0, 0)],
            obstacles:             Vec::new(),
            shelves:               Vec::new(),
            max_steps:             300,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Check dimensions, then every start/obstacle/shelf cell.
    ///
    /// Reports the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(CoreError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }
        let groups: [(&'static str, &[Coord]); 3] = [
            ("agv start", &self.agv_starts),
            ("obstacle", &self.obstacles),
            ("shelf", &self.shelves),
        ];
        for (what, cells) in groups {
            for &cell in cells {
                ensure_in_bounds(what, cell, self.rows, self.cols)?;
            }
        }
        Ok(())
    }
}

/// `Ok` iff `coord` lies in `[0, rows) × [0, cols)`.
pub fn ensure_in_bounds(what: &'static str, coord: Coord, rows: i32, cols: i32) -> CoreResult<()> {
    let inside = (0..rows).contains(&coord.row) && (0..cols).contains(&coord.col);
    if inside {
        Ok(())
    } else {
        Err(CoreError::InvalidCoordinate { what, coord, rows, cols })
    }
}
