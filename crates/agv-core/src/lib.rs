//! `agv-core` — foundational types for the AGV warehouse simulator.
//!
//! This crate is a dependency of every other `agv-*` crate.  It has no
//! `agv-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord` grid cell, Manhattan distance                 |
//! | [`ids`]         | `AgentId`, `OrderId`                                  |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` (reset payload) and its validation        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, OrderId};
pub use time::{SimClock, Tick};
