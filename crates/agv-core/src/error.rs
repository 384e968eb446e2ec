//! Configuration and validation error type.
//!
//! Sub-crates wrap `CoreError` as one variant of their own error enum via a
//! `From` impl so validation sites can use `?` directly.

use thiserror::Error;

use crate::Coord;

/// Validation failures reported synchronously by `reset` / `add_order`.
///
/// A returned error always means the requested mutation was rejected in
/// full; prior simulation state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("{what} coordinate {coord} lies outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        what:  &'static str,
        coord: Coord,
        rows:  i32,
        cols:  i32,
    },
}

/// Shorthand result type for validation in all `agv-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
