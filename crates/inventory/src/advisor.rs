//! Replenishment advisor.
//!
//! Advisory only: derives what to order and whether ordering is permitted,
//! but never mutates state. Executing a recommendation goes through the
//! stock ledger as an explicit order action.

use serde::{Deserialize, Serialize};

use restock_core::EngineResult;
use restock_eoq::{self as eoq, CostPolicy};

use crate::product::{classify, Product, StockStatus};

/// What the advisor recommends for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Basic-model Q*, rounded to whole units.
    pub recommended_quantity: u32,
    pub status: StockStatus,
    /// Only non-Normal products are eligible for a system order.
    pub eligible: bool,
}

/// Recommend an order quantity for `product` under `policy`.
///
/// Fails with `InvalidParameter` when the product's demand or cost cannot
/// feed the EOQ model (e.g. zero annual demand).
pub fn recommend(product: &Product, policy: &CostPolicy) -> EngineResult<Recommendation> {
    let holding_cost = policy.holding_cost(product.cost);
    let result = eoq::basic(product.annual_demand, policy.order_cost, holding_cost)?;

    let status = classify(product.stock, product.minimum_stock);
    Ok(Recommendation {
        recommended_quantity: result.optimal_quantity.round() as u32,
        status,
        eligible: status != StockStatus::Normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::ProductId;

    fn product(stock: u32, minimum_stock: u32) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Oil filter".into(),
            category: "Filters".into(),
            stock,
            minimum_stock,
            price: 18.0,
            cost: 10.0,
            supplier: "Filtros Andinos".into(),
            annual_demand: 1200.0,
            created_at: chrono::Utc::now(),
        }
    }

    fn policy() -> CostPolicy {
        // Reference deployment: S=50, holding 20% of cost.
        CostPolicy::new(50.0, 0.2, 0.1)
    }

    #[test]
    fn low_stock_product_is_eligible() {
        // H = 0.2 * 10 = 2 -> Q* = sqrt(2*1200*50/2) = sqrt(60000) ~= 244.9
        let rec = recommend(&product(2, 20), &policy()).unwrap();
        assert_eq!(rec.recommended_quantity, 245);
        assert_eq!(rec.status, StockStatus::Critical);
        assert!(rec.eligible);
    }

    #[test]
    fn normal_stock_product_is_not_eligible() {
        let rec = recommend(&product(100, 20), &policy()).unwrap();
        assert_eq!(rec.status, StockStatus::Normal);
        assert!(!rec.eligible);
    }

    #[test]
    fn out_of_stock_product_is_eligible() {
        let rec = recommend(&product(0, 20), &policy()).unwrap();
        assert_eq!(rec.status, StockStatus::Out);
        assert!(rec.eligible);
    }

    #[test]
    fn zero_demand_fails_cleanly() {
        let mut p = product(2, 20);
        p.annual_demand = 0.0;
        assert!(recommend(&p, &policy()).is_err());
    }
}
