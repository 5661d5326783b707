//! Read-side projections.
//!
//! Derived, disposable views over current products and the movement
//! ledger. Everything here is recomputed on demand from the inputs it is
//! given; nothing is cached or treated as a source of truth.

pub mod history;
pub mod stock;

pub use history::{movement_history, MovementHistoryRow};
pub use stock::{low_stock, out_of_stock, OutOfStockRow};
