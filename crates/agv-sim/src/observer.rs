//! Simulation observer trait for progress reporting and data collection.

use agv_core::{AgentId, OrderId, Tick};
use agv_fleet::AgentStore;

use crate::{Collision, DispatchOutcome, MetricsSnapshot};

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// The tick that was processed (time before the advance).
    pub tick: Tick,
    /// Dispatcher outcome per agent, id order.
    pub dispatch: Vec<(AgentId, DispatchOutcome)>,
    /// Agents whose position changed.
    pub moved: usize,
    /// Orders that went picking → delivering.
    pub picked_up: Vec<OrderId>,
    /// Orders that went delivering → done.
    pub completed: Vec<OrderId>,
    /// Co-located groups found after movement.
    pub collisions: Vec<Collision>,
    /// KPIs after the tick, time already advanced.
    pub metrics: MetricsSnapshot,
}

/// Callbacks invoked by [`Sim::step_with`][crate::Sim::step_with] and
/// [`Sim::run_to_end`][crate::Sim::run_to_end].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         println!("{}: {} done", report.tick, report.metrics.tasks_done);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before dispatch.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's five phases, including the time advance.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `config.output_interval_ticks` ticks, after
    /// `on_tick_end`, with the post-tick time.
    fn on_snapshot(&mut self, _time: Tick, _agents: &AgentStore) {}

    /// Called once when `run_to_end` stops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
