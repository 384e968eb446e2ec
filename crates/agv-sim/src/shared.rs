//! `SharedSim` — the simulation as one lock-guarded resource.
//!
//! A request layer may receive overlapping `reset` / `order` / `step` /
//! `state` calls.  Every method here takes the single mutex for the whole
//! operation, so callers only ever observe state between ticks, and a
//! `step(n)` is never interleaved with anything else.

use std::sync::{Arc, Mutex, MutexGuard};

use agv_core::{Coord, OrderId, SimConfig};
use agv_grid::Router;

use crate::{MetricsSnapshot, Sim, SimError, SimResult, StateSnapshot, StepSnapshot};

/// Cloneable handle to one shared [`Sim`].
pub struct SharedSim<R: Router> {
    inner: Arc<Mutex<Sim<R>>>,
}

impl<R: Router> Clone for SharedSim<R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<R: Router> SharedSim<R> {
    pub fn new(sim: Sim<R>) -> Self {
        Self { inner: Arc::new(Mutex::new(sim)) }
    }

    /// Run `f` with exclusive access to the simulation.
    pub fn with<T>(&self, f: impl FnOnce(&mut Sim<R>) -> T) -> SimResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn reset(&self, config: SimConfig) -> SimResult<StateSnapshot> {
        self.lock()?.reset(config)
    }

    pub fn add_order(&self, id: impl Into<OrderId>, pick: Coord, drop: Coord) -> SimResult<()> {
        self.lock()?.add_order(id, pick, drop)
    }

    pub fn step(&self, n: u64) -> SimResult<StepSnapshot> {
        Ok(self.lock()?.step_snapshot(n))
    }

    pub fn state(&self) -> SimResult<StateSnapshot> {
        Ok(self.lock()?.state())
    }

    pub fn metrics(&self) -> SimResult<MetricsSnapshot> {
        Ok(self.lock()?.metrics())
    }

    fn lock(&self) -> SimResult<MutexGuard<'_, Sim<R>>> {
        self.inner.lock().map_err(|_| SimError::LockPoisoned)
    }
}
