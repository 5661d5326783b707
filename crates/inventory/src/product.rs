use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_core::ProductId;

/// A tracked part.
///
/// `stock` is mutated only through the ledger rules (or a direct edit,
/// which the ledger turns into a synthetic movement); it is never written
/// by callers directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub minimum_stock: u32,
    /// Unit sale price.
    pub price: f64,
    /// Unit acquisition cost.
    pub cost: f64,
    pub supplier: String,
    /// Annual demand in units/year; drives the EOQ models.
    pub annual_demand: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields of a product creation request (the store assigns id/timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub minimum_stock: u32,
    pub price: f64,
    pub cost: f64,
    pub supplier: String,
    pub annual_demand: f64,
}

/// Explicit partial update for a direct product edit.
///
/// Enumerates exactly the editable fields; anything else is rejected at
/// the DTO boundary. An edit that changes `stock` produces a synthetic
/// ledger movement (see [`crate::ledger::adjustment_for_edit`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub minimum_stock: Option<u32>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub annual_demand: Option<f64>,
}

impl ProductPatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the patch in place. Identity, id and creation timestamp are
    /// not editable.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(minimum_stock) = self.minimum_stock {
            product.minimum_stock = minimum_stock;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(cost) = self.cost {
            product.cost = cost;
        }
        if let Some(supplier) = &self.supplier {
            product.supplier = supplier.clone();
        }
        if let Some(annual_demand) = self.annual_demand {
            product.annual_demand = annual_demand;
        }
    }
}

/// Operational stock status, derived on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// stock == 0
    Out,
    /// 0 < stock <= minimum/2
    Critical,
    /// minimum/2 < stock <= minimum
    Watch,
    /// stock > minimum
    Normal,
}

/// Classify a stock level against its minimum threshold.
///
/// Total over all non-negative integers; the bands are half-open and the
/// critical comparison is done as `2*stock <= minimum` so the midpoint
/// lands in Critical without floating-point arithmetic.
pub fn classify(stock: u32, minimum_stock: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::Out
    } else if u64::from(stock) * 2 <= u64::from(minimum_stock) {
        StockStatus::Critical
    } else if stock <= minimum_stock {
        StockStatus::Watch
    } else {
        StockStatus::Normal
    }
}

impl Product {
    /// Status of the product's persisted stock.
    pub fn status(&self) -> StockStatus {
        classify(self.stock, self.minimum_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundary_table() {
        // The normative boundary cases against a minimum of 10.
        assert_eq!(classify(0, 10), StockStatus::Out);
        assert_eq!(classify(5, 10), StockStatus::Critical);
        assert_eq!(classify(6, 10), StockStatus::Watch);
        assert_eq!(classify(10, 10), StockStatus::Watch);
        assert_eq!(classify(11, 10), StockStatus::Normal);
    }

    #[test]
    fn classify_zero_minimum() {
        assert_eq!(classify(0, 0), StockStatus::Out);
        assert_eq!(classify(1, 0), StockStatus::Normal);
    }

    #[test]
    fn classify_does_not_overflow_at_extremes() {
        assert_eq!(classify(u32::MAX / 2, u32::MAX), StockStatus::Critical);
        assert_eq!(classify(u32::MAX, u32::MAX), StockStatus::Watch);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut product = Product {
            id: restock_core::ProductId::new(1),
            name: "Brake pad".into(),
            category: "Brakes".into(),
            stock: 12,
            minimum_stock: 10,
            price: 35.0,
            cost: 20.0,
            supplier: "Frenosur".into(),
            annual_demand: 600.0,
            created_at: chrono::Utc::now(),
        };

        let patch = ProductPatch {
            stock: Some(3),
            supplier: Some("Importadora Sur".into()),
            ..Default::default()
        };
        patch.apply_to(&mut product);

        assert_eq!(product.stock, 3);
        assert_eq!(product.supplier, "Importadora Sur");
        assert_eq!(product.name, "Brake pad");
        assert_eq!(product.price, 35.0);
    }

    #[test]
    fn empty_patch_is_detectable() {
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch {
            name: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classify is total and consistent with its band
            /// definitions for any (stock, minimum) pair.
            #[test]
            fn classify_matches_band_definitions(stock in 0u32..100_000, minimum in 0u32..100_000) {
                let status = classify(stock, minimum);
                let expected = if stock == 0 {
                    StockStatus::Out
                } else if u64::from(stock) * 2 <= u64::from(minimum) {
                    StockStatus::Critical
                } else if stock <= minimum {
                    StockStatus::Watch
                } else {
                    StockStatus::Normal
                };
                prop_assert_eq!(status, expected);
            }

            /// Property: only Normal products are ineligible for reorder,
            /// and raising stock never moves the status toward a worse band.
            #[test]
            fn classify_is_monotone_in_stock(stock in 0u32..50_000, minimum in 0u32..50_000) {
                fn rank(s: StockStatus) -> u8 {
                    match s {
                        StockStatus::Out => 0,
                        StockStatus::Critical => 1,
                        StockStatus::Watch => 2,
                        StockStatus::Normal => 3,
                    }
                }
                let here = rank(classify(stock, minimum));
                let above = rank(classify(stock + 1, minimum));
                prop_assert!(above >= here);
            }
        }
    }
}
