//! `restock-core` — engine foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{EngineError, EngineResult};
pub use id::{MovementId, ProductId};
