use serde::{Deserialize, Serialize};

use restock_inventory::{Movement, Product};

/// A movement resolved against its product for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementHistoryRow {
    #[serde(flatten)]
    pub movement: Movement,
    /// `None` when the product was deleted after the movement was logged;
    /// the report still renders the row.
    pub product_name: Option<String>,
}

/// All movements newest-first, each resolved to its product's name.
///
/// Movements referencing a deleted product are kept with `product_name`
/// set to `None` rather than failing the whole report.
pub fn movement_history(movements: &[Movement], products: &[Product]) -> Vec<MovementHistoryRow> {
    let mut rows: Vec<MovementHistoryRow> = movements
        .iter()
        .map(|m| MovementHistoryRow {
            movement: m.clone(),
            product_name: products
                .iter()
                .find(|p| p.id == m.product_id)
                .map(|p| p.name.clone()),
        })
        .collect();
    // Newest first; id breaks timestamp ties in insertion order.
    rows.sort_by(|a, b| {
        b.movement
            .occurred_at
            .cmp(&a.movement.occurred_at)
            .then(b.movement.id.cmp(&a.movement.id))
    });
    rows
}
