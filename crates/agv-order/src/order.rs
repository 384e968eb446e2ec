//! One order and its lifecycle.

use std::fmt;

use agv_core::{Coord, OrderId};

/// Order lifecycle: `Pending → Picking → Delivering → Done`.
///
/// - `Pending`: not yet claimed.
/// - `Picking`: claimed by the dispatcher; some agent is heading for `pick`.
/// - `Delivering`: an agent has reached `pick`.
/// - `Done`: an agent has reached `drop`.  Terminal.
///
/// The derived `Ord` follows lifecycle order, so "never moves backward" is
/// simply `new >= old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Picking,
    Delivering,
    Done,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending    => "pending",
            OrderStatus::Picking    => "picking",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Done       => "done",
        }
    }

    /// The status after this one, or `None` from `Done`.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending    => Some(OrderStatus::Picking),
            OrderStatus::Picking    => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Done),
            OrderStatus::Done       => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pick-and-deliver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id:   OrderId,
    pub pick: Coord,
    pub drop: Coord,
    status:   OrderStatus,
}

impl Order {
    /// A new `Pending` order.
    pub fn new(id: OrderId, pick: Coord, drop: Coord) -> Self {
        Self { id, pick, drop, status: OrderStatus::Pending }
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Move one stage forward.  Returns the new status, or `None` if the
    /// order was already `Done` (status unchanged).
    pub fn advance(&mut self) -> Option<OrderStatus> {
        let next = self.status.next()?;
        self.status = next;
        Some(next)
    }

    /// Cell the next stage heads for: `pick` until picked up, `drop` after.
    pub fn target(&self) -> Coord {
        match self.status {
            OrderStatus::Pending => self.pick,
            _ => self.drop,
        }
    }
}
