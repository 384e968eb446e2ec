//! The `Sim` struct and its tick loop.

use agv_core::config::ensure_in_bounds;
use agv_core::{AgentId, Coord, OrderId, SimClock, SimConfig, Tick};
use agv_fleet::{AgentStore, StepOutcome};
use agv_grid::{Grid, Router};
use agv_order::{Order, OrderBook, OrderStatus};
use tracing::{debug, info};

use crate::collision;
use crate::dispatch::{self, DispatchOutcome};
use crate::snapshot::{AgentView, MetricsSnapshot, OrderView, StateSnapshot, StepSnapshot};
use crate::{NoopObserver, SimObserver, SimResult, TickReport};

/// Recommended upper bound on `n` for a single externally requested `step`.
/// The core does not clamp; request layers should.
pub const MAX_STEP_BATCH: u64 = 100;

/// The simulation: grid, fleet, orders, clock and KPIs.
///
/// All mutation goes through [`reset`](Self::reset),
/// [`add_order`](Self::add_order) and the step methods.  Validation always
/// happens before the first write, so a rejected call leaves the state
/// exactly as it was.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// The configuration the current run was reset with.
    pub config: SimConfig,

    /// Current tick plus the `max_steps` cap.
    pub clock: SimClock,

    /// Static floor plan.
    pub grid: Grid,

    /// All agents, id order.
    pub agents: AgentStore,

    /// All orders, insertion order.
    pub orders: OrderBook,

    /// Cumulative collision counter.
    pub collisions: u64,

    /// The routing algorithm.  Survives `reset`.
    pub router: R,

    last_dispatch: Vec<(AgentId, DispatchOutcome)>,
}

impl<R: Router> Sim<R> {
    /// Validate `config` and build a fresh simulation.
    pub(crate) fn from_config(config: SimConfig, router: R) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            clock:         SimClock::new(config.max_steps),
            grid:          Grid::new(
                config.rows,
                config.cols,
                config.obstacles.iter().copied(),
                config.shelves.iter().copied(),
            ),
            agents:        AgentStore::from_starts(&config.agv_starts),
            orders:        OrderBook::new(),
            collisions:    0,
            router,
            last_dispatch: Vec::new(),
            config,
        })
    }

    // ── External operations ───────────────────────────────────────────────

    /// Replace the whole simulation state.
    ///
    /// Agents are created at `agv_starts` with ids `1..=N`; orders, time and
    /// the collision counter start from zero.  On a validation error nothing
    /// changes.
    pub fn reset(&mut self, config: SimConfig) -> SimResult<StateSnapshot> {
        config.validate()?;
        info!(
            rows = config.rows,
            cols = config.cols,
            agents = config.agv_starts.len(),
            obstacles = config.obstacles.len(),
            max_steps = config.max_steps,
            "simulation reset"
        );
        self.clock = SimClock::new(config.max_steps);
        self.grid = Grid::new(
            config.rows,
            config.cols,
            config.obstacles.iter().copied(),
            config.shelves.iter().copied(),
        );
        self.agents = AgentStore::from_starts(&config.agv_starts);
        self.orders = OrderBook::new();
        self.collisions = 0;
        self.last_dispatch.clear();
        self.config = config;
        Ok(self.state())
    }

    /// Insert a `Pending` order, or overwrite the order with the same id.
    ///
    /// An overwritten order keeps its dispatch precedence.  Both cells must
    /// lie on the grid.
    pub fn add_order(&mut self, id: impl Into<OrderId>, pick: Coord, drop: Coord) -> SimResult<()> {
        let (rows, cols) = (self.grid.rows, self.grid.cols);
        ensure_in_bounds("pick", pick, rows, cols)?;
        ensure_in_bounds("drop", drop, rows, cols)?;

        let id = id.into();
        let replaced = self.orders.upsert(Order::new(id.clone(), pick, drop));
        debug!(order = %id, %pick, %drop, replaced, "order added");
        Ok(())
    }

    /// Advance up to `n` ticks, stopping early at `max_steps`.
    ///
    /// Returns the number of ticks actually processed.
    pub fn step(&mut self, n: u64) -> u64 {
        self.step_with(n, &mut NoopObserver)
    }

    /// [`step`](Self::step) plus both snapshots, the shape a request layer
    /// returns.
    pub fn step_snapshot(&mut self, n: u64) -> StepSnapshot {
        self.step(n);
        StepSnapshot { state: self.state(), metrics: self.metrics() }
    }

    /// Advance up to `n` ticks, calling `observer` hooks at tick boundaries.
    pub fn step_with<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut ran = 0;
        while ran < n && !self.clock.is_exhausted() {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);

            let report = self.process_tick(now);
            observer.on_tick_end(&report);

            let time = self.clock.current_tick;
            let interval = self.config.output_interval_ticks;
            if interval > 0 && time.0.is_multiple_of(interval) {
                observer.on_snapshot(time, &self.agents);
            }
            ran += 1;
        }
        ran
    }

    /// Run until `max_steps`, then call `on_sim_end`.
    pub fn run_to_end<O: SimObserver>(&mut self, observer: &mut O) -> u64 {
        let ran = self.step_with(self.clock.remaining(), observer);
        observer.on_sim_end(self.clock.current_tick);
        ran
    }

    /// Dispatcher outcomes from the most recent tick, id order.
    pub fn last_dispatch(&self) -> &[(AgentId, DispatchOutcome)] {
        &self.last_dispatch
    }

    #[inline]
    pub fn time(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Projections ───────────────────────────────────────────────────────

    pub fn state(&self) -> StateSnapshot {
        StateSnapshot {
            time:      self.clock.current_tick.0,
            rows:      self.grid.rows,
            cols:      self.grid.cols,
            obstacles: self.grid.obstacles.iter().copied().collect(),
            shelves:   self.grid.shelves.iter().copied().collect(),
            agents:    self
                .agents
                .iter()
                .map(|a| AgentView {
                    id:           a.id,
                    pos:          a.position,
                    active_ticks: a.active_ticks,
                    dist:         a.distance_travelled,
                    carrying:     a.carrying.clone(),
                })
                .collect(),
            orders:    self
                .orders
                .iter()
                .map(|o| OrderView {
                    id:     o.id.clone(),
                    pick:   o.pick,
                    drop:   o.drop,
                    status: o.status(),
                })
                .collect(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        let time = self.clock.current_tick.0;
        let possible = self.agents.len() as u64 * time.max(1);
        let utilization = if possible == 0 {
            0.0
        } else {
            self.agents.total_active_ticks() as f64 / possible as f64
        };
        MetricsSnapshot {
            time,
            tasks_total:    self.orders.len(),
            tasks_done:     self.orders.count_with(OrderStatus::Done),
            collisions:     self.collisions,
            distance_total: self.agents.total_distance(),
            utilization,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> TickReport {
        // ── Phase 1: dispatch idle agents ─────────────────────────────────
        let dispatch = dispatch::dispatch(&self.router, &self.grid, &mut self.agents, &mut self.orders);

        // ── Phase 2: move ─────────────────────────────────────────────────
        let moved = self
            .agents
            .iter_mut()
            .map(|a| a.advance_one_tick())
            .filter(|&o| o == StepOutcome::Moved)
            .count();

        // ── Phase 3: order arrivals ───────────────────────────────────────
        let (picked_up, completed) = self.update_orders();

        // ── Phase 4: collisions ───────────────────────────────────────────
        let collisions = collision::resolve(&mut self.agents);
        self.collisions += collisions.iter().map(|c| c.overlap()).sum::<u64>();

        // ── Phase 5: advance time ─────────────────────────────────────────
        self.clock.advance();

        debug!(
            tick = now.0,
            moved,
            picked_up = picked_up.len(),
            completed = completed.len(),
            collisions = collisions.len(),
            "tick processed"
        );

        self.last_dispatch = dispatch.clone();
        TickReport {
            tick: now,
            dispatch,
            moved,
            picked_up,
            completed,
            collisions,
            metrics: self.metrics(),
        }
    }

    /// Advance orders whose next cell is occupied.  Arrival is by position:
    /// any agent on the cell counts, whoever was routed there.
    ///
    /// On pickup the lowest-id agent on the pick cell that is not already
    /// carrying takes the cargo.  If every agent there is loaded the order
    /// is left uncarried and the dispatcher hands it to the next free idle
    /// agent.  On delivery whoever carries it lets go.
    fn update_orders(&mut self) -> (Vec<OrderId>, Vec<OrderId>) {
        let mut picked_up = Vec::new();
        let mut completed = Vec::new();

        for order in self.orders.iter_mut() {
            match order.status() {
                OrderStatus::Picking if self.agents.any_at(order.pick) => {
                    order.advance();
                    if let Some(carrier) = self
                        .agents
                        .iter_mut()
                        .find(|a| a.position == order.pick && a.carrying.is_none())
                    {
                        carrier.carrying = Some(order.id.clone());
                    }
                    picked_up.push(order.id.clone());
                }
                OrderStatus::Delivering if self.agents.any_at(order.drop) => {
                    order.advance();
                    for agent in self.agents.iter_mut() {
                        if agent.carrying.as_ref() == Some(&order.id) {
                            agent.carrying = None;
                        }
                    }
                    completed.push(order.id.clone());
                }
                _ => {}
            }
        }
        (picked_up, completed)
    }
}
