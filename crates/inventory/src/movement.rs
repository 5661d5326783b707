use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_core::{MovementId, ProductId};

/// Reason recorded when the caller supplies none. Kept as the original
/// deployment's wire value so existing movement histories stay uniform.
pub const DEFAULT_REASON: &str = "Ajuste de inventario";

/// Reason/actor recorded by system-triggered replenishment orders.
pub const ORDER_REASON: &str = "EOQ order";
pub const ORDER_ACTOR: &str = "System";

/// Reason recorded for the synthetic movement of a direct stock edit.
pub const EDIT_REASON: &str = "manual adjustment";

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entry,
    Exit,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "entry",
            MovementKind::Exit => "exit",
        }
    }
}

impl core::str::FromStr for MovementKind {
    type Err = restock_core::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(MovementKind::Entry),
            "exit" => Ok(MovementKind::Exit),
            other => Err(restock_core::EngineError::invalid_parameter(format!(
                "unknown movement kind: {other}"
            ))),
        }
    }
}

/// One appended ledger record: the sole legitimate explanation for any
/// change in a product's stock. Never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: u32,
    pub reason: String,
    pub actor: String,
    pub occurred_at: DateTime<Utc>,
}

/// A movement about to be appended (the store assigns id/timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovement {
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: u32,
    pub reason: String,
    pub actor: String,
}

impl NewMovement {
    pub fn new(
        product_id: ProductId,
        kind: MovementKind,
        quantity: u32,
        reason: Option<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            kind,
            quantity,
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
            actor: actor.into(),
        }
    }

    /// The entry a system-triggered replenishment order appends.
    pub fn order(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            kind: MovementKind::Entry,
            quantity,
            reason: ORDER_REASON.to_string(),
            actor: ORDER_ACTOR.to_string(),
        }
    }

    /// The synthetic movement recorded when a direct edit changes stock.
    pub fn edit_adjustment(
        product_id: ProductId,
        kind: MovementKind,
        quantity: u32,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            kind,
            quantity,
            reason: EDIT_REASON.to_string(),
            actor: actor.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reason_defaults_to_inventory_adjustment() {
        let m = NewMovement::new(ProductId::new(1), MovementKind::Entry, 5, None, "Admin");
        assert_eq!(m.reason, DEFAULT_REASON);
    }

    #[test]
    fn order_movements_carry_system_identity() {
        let m = NewMovement::order(ProductId::new(7), 173);
        assert_eq!(m.kind, MovementKind::Entry);
        assert_eq!(m.reason, ORDER_REASON);
        assert_eq!(m.actor, ORDER_ACTOR);
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [MovementKind::Entry, MovementKind::Exit] {
            assert_eq!(kind.as_str().parse::<MovementKind>().unwrap(), kind);
        }
        assert!("transfer".parse::<MovementKind>().is_err());
    }
}
