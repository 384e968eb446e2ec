//! Fluent builder for constructing a [`Sim`].

use agv_core::{Coord, OrderId, SimConfig};
use agv_grid::Router;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, AGV starts, obstacles, shelves, step cap
/// - `R: Router` — the routing algorithm (e.g. [`agv_grid::AStarRouter`])
///
/// # Optional inputs
///
/// | Method              | Default        |
/// |---------------------|----------------|
/// | `.order(id, p, d)`  | no orders      |
/// | `.orders(iter)`     | no orders      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AStarRouter)
///     .order("O1", Coord::new(1, 1), Coord::new(10, 10))
///     .build()?;
/// sim.run_to_end(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config: SimConfig,
    router: R,
    orders: Vec<(OrderId, Coord, Coord)>,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(config: SimConfig, router: R) -> Self {
        Self { config, router, orders: Vec::new() }
    }

    /// Queue one order, added after the grid is built.
    pub fn order(mut self, id: impl Into<OrderId>, pick: Coord, drop: Coord) -> Self {
        self.orders.push((id.into(), pick, drop));
        self
    }

    /// Queue a batch of `(id, pick, drop)` triples, in order.
    pub fn orders<I>(mut self, orders: I) -> Self
    where
        I: IntoIterator<Item = (OrderId, Coord, Coord)>,
    {
        self.orders.extend(orders);
        self
    }

    /// Validate the configuration and every queued order, and return a
    /// ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim<R>> {
        let mut sim = Sim::from_config(self.config, self.router)?;
        for (id, pick, drop) in self.orders {
            sim.add_order(id, pick, drop)?;
        }
        Ok(sim)
    }
}
