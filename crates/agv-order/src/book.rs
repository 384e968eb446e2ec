//! `OrderBook` — every order, in insertion order.
//!
//! Insertion order is the dispatcher's only precedence rule, so the book
//! keeps orders in a `Vec` with a side index for id lookup.  Re-adding an
//! existing id replaces that order in its original slot.

use std::collections::HashMap;

use agv_core::OrderId;

use crate::{Order, OrderStatus};

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    index:  HashMap<OrderId, usize>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `order`, or overwrite an existing order with the same id.
    ///
    /// Returns `true` if an existing order was replaced.  A replaced order
    /// keeps its precedence slot but restarts from its new status.
    pub fn upsert(&mut self, order: Order) -> bool {
        match self.index.get(&order.id) {
            Some(&slot) => {
                self.orders[slot] = order;
                true
            }
            None => {
                self.index.insert(order.id.clone(), self.orders.len());
                self.orders.push(order);
                false
            }
        }
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.index.get(id).map(|&slot| &self.orders[slot])
    }

    pub fn get_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.index.get(id).map(|&slot| &mut self.orders[slot])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Order> {
        self.orders.iter_mut()
    }

    /// Number of orders currently in `status`.
    pub fn count_with(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status() == status).count()
    }

    /// First order (in insertion order) still open for a new assignment:
    /// `Pending` or `Picking`.
    pub fn first_assignable(&self) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| matches!(o.status(), OrderStatus::Pending | OrderStatus::Picking))
    }
}

impl<'a> IntoIterator for &'a OrderBook {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
