//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one grid
//! cell of movement; there is no wall-clock mapping.  `SimClock` pairs the
//! current tick with the `max_steps` cap that bounds every run.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Current tick plus the hard cap on how far a run may advance.
///
/// `current_tick` never exceeds `max_steps`: [`SimClock::advance`] is only
/// called by the orchestrator after checking [`SimClock::is_exhausted`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` at tick end.
    pub current_tick: Tick,
    /// No tick is processed once `current_tick >= max_steps`.
    pub max_steps: u64,
}

impl SimClock {
    pub fn new(max_steps: u64) -> Self {
        Self { current_tick: Tick::ZERO, max_steps }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once the step cap has been reached.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current_tick.0 >= self.max_steps
    }

    /// Ticks still available before the cap.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.max_steps.saturating_sub(self.current_tick.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current_tick, self.max_steps)
    }
}
