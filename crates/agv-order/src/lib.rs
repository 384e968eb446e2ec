//! `agv-order` — pick-and-deliver orders.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`order`]   | `Order`, `OrderStatus` (forward-only lifecycle)       |
//! | [`book`]    | `OrderBook` — insertion-ordered, overwrite-by-id      |

pub mod book;
pub mod order;


pub use book::OrderBook;
pub use order::{Order, OrderStatus};
