//! Engine error model.

use thiserror::Error;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Four deterministic failure kinds, reported synchronously to the caller.
/// The engine never retries on its own: replenishment and stock adjustment
/// are discrete user/system-triggered actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A caller supplied a value outside the model's domain (e.g. a
    /// non-positive demand or cost for an EOQ computation).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An exit movement would drive stock below zero. The action is
    /// rejected without mutating anything.
    #[error("insufficient stock: {available} available, {requested} requested")]
    InsufficientStock { available: u32, requested: u32 },

    /// The storage collaborator failed. Propagated unchanged, never
    /// swallowed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl EngineError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn insufficient_stock(available: u32, requested: u32) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
