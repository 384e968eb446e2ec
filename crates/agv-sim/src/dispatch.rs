//! Dispatcher: hands idle agents their next order stage.
//!
//! Runs once per tick, before anyone moves, visiting agents in id order.
//! For an idle agent the target is chosen as follows:
//!
//! 1. If the agent is carrying cargo for an order that is `Delivering`, it
//!    heads for that order's drop cell.
//! 2. Otherwise, if some `Delivering` order has no carrier (everyone on its
//!    pick cell was already loaded), the agent adopts the first such order
//!    and heads for its drop.
//! 3. Otherwise the first order in insertion order that is `Pending`
//!    (target: pick) or `Picking` (target: drop).  `Done` orders are never
//!    handed out, and carried `Delivering` orders stay with their carrier.
//!
//! The route is planned with every obstacle and every *other* agent's
//! current cell blocked.  A `Pending` order becomes `Picking` the moment a
//! route to it is assigned, so a later agent in the same pass cannot claim
//! it again.  If no route exists the agent stays idle and no order changes.

use std::collections::HashSet;

use agv_core::{AgentId, Coord, OrderId};
use agv_fleet::{Agent, AgentStore};
use agv_grid::{Grid, Router};
use agv_order::{Order, OrderBook, OrderStatus};
use tracing::{debug, trace};

use crate::CellSet;

/// Which half of an order a route serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    ToPick,
    ToDrop,
}

/// What the dispatcher did with one agent this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Agent still had a route; left alone.
    EnRoute,
    /// No order stage available.
    NoWork,
    /// A stage was available but no route reaches its target.
    Unreachable { order: OrderId, target: Coord },
    /// Route assigned.  `claimed` is set when this assignment moved the
    /// order from `Pending` to `Picking`.
    Assigned {
        order:   OrderId,
        leg:     Leg,
        target:  Coord,
        hops:    usize,
        claimed: bool,
    },
}

/// Run one dispatch pass.  Returns one outcome per agent, in id order.
pub fn dispatch<R: Router + ?Sized>(
    router: &R,
    grid:   &Grid,
    agents: &mut AgentStore,
    orders: &mut OrderBook,
) -> Vec<(AgentId, DispatchOutcome)> {
    // Positions do not change during dispatch, so one set serves every agent;
    // the acting agent's own cell is lifted out around its planning call.
    let mut blocked: CellSet = grid.obstacles.iter().copied().collect();
    blocked.extend(agents.positions());
    let bounds = grid.bounds();
    let mut carried: HashSet<OrderId> = agents.iter().filter_map(|a| a.carrying.clone()).collect();

    let mut outcomes = Vec::with_capacity(agents.len());
    for agent in agents.iter_mut() {
        if !agent.is_idle() {
            outcomes.push((agent.id, DispatchOutcome::EnRoute));
            continue;
        }

        let Some(Stage { order_id, leg, target, adopt }) = select_stage(agent, orders, &carried) else {
            outcomes.push((agent.id, DispatchOutcome::NoWork));
            continue;
        };

        let here = agent.position;
        let was_blocked = blocked.remove(&here);
        let route = router.route(&blocked, bounds, here, target);
        if was_blocked {
            blocked.insert(here);
        }

        let Some(route) = route else {
            trace!(agent = %agent.id, order = %order_id, %target, "target unreachable; agent stays idle");
            outcomes.push((agent.id, DispatchOutcome::Unreachable { order: order_id, target }));
            continue;
        };

        let hops = route.hops();
        agent.set_route(Some(route));
        if adopt {
            agent.carrying = Some(order_id.clone());
            carried.insert(order_id.clone());
        }

        let claimed = match orders.get_mut(&order_id) {
            Some(order) if order.status() == OrderStatus::Pending => {
                order.advance();
                true
            }
            _ => false,
        };

        debug!(agent = %agent.id, order = %order_id, ?leg, %target, hops, claimed, "route assigned");
        outcomes.push((agent.id, DispatchOutcome::Assigned { order: order_id, leg, target, hops, claimed }));
    }
    outcomes
}

struct Stage {
    order_id: OrderId,
    leg:      Leg,
    target:   Coord,
    /// The agent takes over the cargo of an uncarried `Delivering` order.
    adopt:    bool,
}

/// Pick the order stage an idle agent should work on next.
fn select_stage(agent: &mut Agent, orders: &OrderBook, carried: &HashSet<OrderId>) -> Option<Stage> {
    if let Some(cargo) = agent.carrying.as_ref() {
        match orders.get(cargo) {
            Some(order) if order.status() == OrderStatus::Delivering => {
                return Some(Stage { order_id: order.id.clone(), leg: Leg::ToDrop, target: order.drop, adopt: false });
            }
            // The order was overwritten or finished without us; drop the stale cargo.
            _ => agent.carrying = None,
        }
    }

    let orphan = orders
        .iter()
        .find(|o| o.status() == OrderStatus::Delivering && !carried.contains(&o.id));
    if let Some(order) = orphan {
        return Some(Stage { order_id: order.id.clone(), leg: Leg::ToDrop, target: order.drop, adopt: true });
    }

    orders.first_assignable().map(|order: &Order| {
        let leg = match order.status() {
            OrderStatus::Pending => Leg::ToPick,
            _ => Leg::ToDrop,
        };
        Stage { order_id: order.id.clone(), leg, target: order.target(), adopt: false }
    })
}
