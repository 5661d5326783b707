use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_inventory::{Movement, MovementKind, Product};

/// An out-of-stock product with the timestamp of its most recent restock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutOfStockRow {
    pub product: Product,
    /// Latest `entry` movement for the product; `None` when it has never
    /// been restocked.
    pub last_entry_at: Option<DateTime<Utc>>,
}

/// Products running low: `0 < stock <= minimum`, most depleted first.
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    let mut rows: Vec<Product> = products
        .iter()
        .filter(|p| p.stock > 0 && p.stock <= p.minimum_stock)
        .cloned()
        .collect();
    rows.sort_by_key(|p| p.stock);
    rows
}

/// Products with zero stock, each annotated with its last restock date.
pub fn out_of_stock(products: &[Product], movements: &[Movement]) -> Vec<OutOfStockRow> {
    products
        .iter()
        .filter(|p| p.stock == 0)
        .map(|p| {
            let last_entry_at = movements
                .iter()
                .filter(|m| m.product_id == p.id && m.kind == MovementKind::Entry)
                .map(|m| m.occurred_at)
                .max();
            OutOfStockRow {
                product: p.clone(),
                last_entry_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use restock_core::{MovementId, ProductId};

    fn product(id: i64, stock: u32, minimum_stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("part-{id}"),
            category: "General".into(),
            stock,
            minimum_stock,
            price: 10.0,
            cost: 6.0,
            supplier: "ACME".into(),
            annual_demand: 500.0,
            created_at: Utc::now(),
        }
    }

    fn entry(id: i64, product_id: i64, day: u32) -> Movement {
        Movement {
            id: MovementId::new(id),
            product_id: ProductId::new(product_id),
            kind: MovementKind::Entry,
            quantity: 10,
            reason: "Ajuste de inventario".into(),
            actor: "Admin".into(),
            occurred_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn low_stock_filters_and_sorts_ascending() {
        let products = vec![
            product(1, 8, 10),
            product(2, 0, 10),  // out, not low
            product(3, 2, 10),
            product(4, 30, 10), // healthy
            product(5, 10, 10), // boundary: included
        ];
        let rows = low_stock(&products);
        let ids: Vec<i64> = rows.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 5]);
    }

    #[test]
    fn out_of_stock_picks_latest_entry_per_product() {
        let products = vec![product(1, 0, 10), product(2, 0, 10), product(3, 4, 10)];
        let movements = vec![
            entry(1, 1, 3),
            entry(2, 1, 9), // latest for product 1
            Movement {
                kind: MovementKind::Exit,
                ..entry(3, 1, 20) // exits never count as restocks
            },
            entry(4, 3, 5), // different product
        ];

        let rows = out_of_stock(&products, &movements);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product.id.as_i64(), 1);
        assert_eq!(
            rows[0].last_entry_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap())
        );
        // Product 2 has never been restocked.
        assert_eq!(rows[1].product.id.as_i64(), 2);
        assert_eq!(rows[1].last_entry_at, None);
    }
}
