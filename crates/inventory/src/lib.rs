//! Inventory domain module.
//!
//! This crate contains the business rules for products, stock movements
//! and replenishment, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage). The stock field of a product is only
//! ever explained by the ledger rules in [`ledger`].

pub mod advisor;
pub mod ledger;
pub mod movement;
pub mod product;

pub use advisor::{recommend, Recommendation};
pub use ledger::{adjustment_for_edit, apply_kind};
pub use movement::{
    Movement, MovementKind, NewMovement, DEFAULT_REASON, EDIT_REASON, ORDER_ACTOR, ORDER_REASON,
};
pub use product::{classify, NewProduct, Product, ProductPatch, StockStatus};
