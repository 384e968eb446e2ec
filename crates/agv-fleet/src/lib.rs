//! `agv-fleet` — per-vehicle state and fleet storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `Agent` (position, route queue, counters), `StepOutcome`  |
//! | [`store`]   | `AgentStore` — all agents in id order                     |
//!
//! # Movement model
//!
//! An agent's route is a queue of future cells.  Each tick the orchestrator
//! calls [`Agent::advance_one_tick`], which pops exactly one cell.  The
//! collision resolver may push the current cell back onto the front with
//! [`Agent::hold_position`], turning the next tick into a wait.

pub mod agent;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, StepOutcome};
pub use store::AgentStore;
