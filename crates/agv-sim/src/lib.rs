//! `agv-sim` — tick loop orchestrator for the AGV warehouse simulator.
//!
//! # Five-phase tick loop
//!
//! ```text
//! while ticks_left > 0 && time < max_steps:
//!   ① Dispatch   — every idle agent gets the next actionable order stage
//!                  and a route from the Router (pending orders are claimed).
//!   ② Move       — every agent consumes one hop.
//!   ③ Orders     — picking → delivering when an agent stands on `pick`;
//!                  delivering → done when an agent stands on `drop`.
//!   ④ Collisions — co-located agents are counted; all but the lowest id
//!                  wait one tick.
//!   ⑤ Advance    — time += 1.
//! ```
//!
//! The phases never interleave and nothing in them is random, so a given
//! configuration and order sequence always produces the same run.
//!
//! # Sharing
//!
//! [`SharedSim`] wraps a [`Sim`] in one mutex; every operation holds the
//! lock for its whole duration.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `fx-hash`  | FxHash for the per-tick blocked set and cell index.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use agv_core::{Coord, SimConfig};
//! use agv_grid::AStarRouter;
//! use agv_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), AStarRouter)
//!     .order("O1", Coord::new(1, 1), Coord::new(10, 10))
//!     .build()?;
//! sim.step(20);
//! assert_eq!(sim.metrics().tasks_done, 1);
//! ```

pub mod builder;
pub mod collision;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod shared;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use collision::Collision;
pub use dispatch::{DispatchOutcome, Leg};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use shared::SharedSim;
pub use sim::{MAX_STEP_BATCH, Sim};
pub use snapshot::{AgentView, MetricsSnapshot, OrderView, StateSnapshot, StepSnapshot};

// ── Per-tick cell collections ─────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type CellSet = rustc_hash::FxHashSet<agv_core::Coord>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellSet = std::collections::HashSet<agv_core::Coord>;

#[cfg(feature = "fx-hash")]
pub(crate) type CellMap<V> = rustc_hash::FxHashMap<agv_core::Coord, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellMap<V> = std::collections::HashMap<agv_core::Coord, V>;
