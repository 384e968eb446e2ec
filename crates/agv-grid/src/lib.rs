//! `agv-grid` — warehouse floor model and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `GridBounds` (neighbour query), `Grid` (obstacles, shelves) |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`, `plan_path`        |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |
//! | `fx-hash` | FxHash for the A* search maps.                             |

pub mod grid;
pub mod router;

#[cfg(test)]
mod tests;

pub use grid::{Grid, GridBounds};
pub use router::{AStarRouter, Route, Router, plan_path};
