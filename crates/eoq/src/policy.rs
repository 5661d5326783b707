use serde::{Deserialize, Serialize};

/// Cost parameters the deployment chooses; the models never fix them.
///
/// The reference deployment uses a flat order cost of 50, a holding cost
/// of 20% of unit cost per year and a shortage cost of 10% of unit price.
/// Those values live in the calling layer's configuration, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPolicy {
    /// Fixed cost of placing one order.
    pub order_cost: f64,
    /// Annual holding cost as a fraction of unit cost.
    pub holding_rate: f64,
    /// Shortage (backorder) cost as a fraction of unit price.
    pub shortage_rate: f64,
}

impl CostPolicy {
    pub fn new(order_cost: f64, holding_rate: f64, shortage_rate: f64) -> Self {
        Self {
            order_cost,
            holding_rate,
            shortage_rate,
        }
    }

    /// Annual cost of holding one unit, given its unit cost.
    pub fn holding_cost(&self, unit_cost: f64) -> f64 {
        self.holding_rate * unit_cost
    }

    /// Cost of one unit of backlog, given its unit price.
    pub fn shortage_cost(&self, unit_price: f64) -> f64 {
        self.shortage_rate * unit_price
    }
}
