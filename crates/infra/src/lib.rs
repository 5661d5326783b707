//! Infrastructure: storage backends and the ledger write path.
//!
//! The domain crates stay IO-free; this crate owns the [`StockStore`]
//! collaborator contract, its in-memory and Postgres implementations, and
//! the [`StockLedger`] façade that every stock mutation goes through.

pub mod ledger;
pub mod store;

pub use ledger::StockLedger;
pub use store::{InMemoryStockStore, PostgresStockStore, StockStore};
