use serde::{Deserialize, Serialize};

use restock_core::{EngineError, EngineResult};

/// Days per order cycle assume a 365-day year. Shared with the chart
/// series so both convert between annual and daily demand identically.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Result of the basic EOQ model (no shortages allowed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicEoq {
    /// Optimal order quantity Q*.
    pub optimal_quantity: f64,
    /// Days between orders at the optimum.
    pub cycle_time_days: f64,
    /// Total cost per unit time: ordering rate + holding rate.
    pub cost_per_unit_time: f64,
    /// Total cost over one full order cycle.
    pub cost_per_cycle: f64,
}

/// Result of the EOQ model with planned shortages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortageEoq {
    /// Optimal order quantity Q*.
    pub optimal_quantity: f64,
    /// Peak on-hand inventory right after a delivery (<= Q*).
    pub max_inventory: f64,
    /// Largest backlog reached within a cycle (Q* - max_inventory).
    pub max_shortage: f64,
    /// Total cost per unit time: ordering + holding + shortage rates.
    pub cost_per_unit_time: f64,
    /// Total cost over one full order cycle.
    pub cost_per_cycle: f64,
    /// Fraction of each cycle during which stock is non-negative.
    pub in_stock_fraction: f64,
}

fn ensure_positive(value: f64, name: &str) -> EngineResult<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(EngineError::invalid_parameter(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

/// Basic EOQ: Q* = sqrt(2DS/H).
///
/// `demand` is annual demand D (units/year), `order_cost` the fixed cost S
/// of placing one order, `holding_cost` the cost H of holding one unit for
/// a year. All three must be positive: zero or negative H or D would make
/// the formulas divide by zero or take the root of a negative number, so
/// non-positive inputs are rejected up front rather than returning
/// non-finite values.
///
/// At Q* the ordering-rate cost D·S/Q* equals the holding-rate cost
/// H·Q*/2; the property tests rely on that equality.
pub fn basic(demand: f64, order_cost: f64, holding_cost: f64) -> EngineResult<BasicEoq> {
    ensure_positive(demand, "demand")?;
    ensure_positive(order_cost, "order_cost")?;
    ensure_positive(holding_cost, "holding_cost")?;

    let optimal_quantity = (2.0 * demand * order_cost / holding_cost).sqrt();
    let cycle_time_days = optimal_quantity / demand * DAYS_PER_YEAR;
    let cost_per_unit_time =
        demand * order_cost / optimal_quantity + holding_cost * optimal_quantity / 2.0;
    let cost_per_cycle = cost_per_unit_time * optimal_quantity / demand;

    Ok(BasicEoq {
        optimal_quantity,
        cycle_time_days,
        cost_per_unit_time,
        cost_per_cycle,
    })
}

/// EOQ with planned shortages: stockouts are permitted and backordered,
/// trading shortage cost P against holding cost H.
///
/// As P grows large the outputs converge to [`basic`]'s: the shortage term
/// (H+P)/P tends to 1 and `max_shortage` tends to 0.
pub fn with_shortages(
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
    shortage_cost: f64,
) -> EngineResult<ShortageEoq> {
    ensure_positive(demand, "demand")?;
    ensure_positive(order_cost, "order_cost")?;
    ensure_positive(holding_cost, "holding_cost")?;
    ensure_positive(shortage_cost, "shortage_cost")?;

    let base = 2.0 * demand * order_cost / holding_cost;
    let optimal_quantity = (base * (holding_cost + shortage_cost) / shortage_cost).sqrt();
    let max_inventory = (base * shortage_cost / (holding_cost + shortage_cost)).sqrt();
    // max_inventory <= Q* by construction, so this never goes negative.
    let max_shortage = optimal_quantity - max_inventory;
    let cost_per_unit_time = demand * order_cost / optimal_quantity
        + holding_cost * max_inventory * max_inventory / (2.0 * optimal_quantity)
        + shortage_cost * max_shortage * max_shortage / (2.0 * optimal_quantity);
    let cost_per_cycle = cost_per_unit_time * optimal_quantity / demand;
    let in_stock_fraction = max_inventory / optimal_quantity;

    Ok(ShortageEoq {
        optimal_quantity,
        max_inventory,
        max_shortage,
        cost_per_unit_time,
        cost_per_cycle,
        in_stock_fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn basic_worked_example() {
        // D=1200/yr, S=50, H=4 -> Q* = sqrt(30000) ~= 173.2, cycle ~= 52.7 days.
        let result = basic(1200.0, 50.0, 4.0).unwrap();
        assert_close(result.optimal_quantity, 173.205, 0.001);
        assert_close(result.cycle_time_days, 52.683, 0.001);
    }

    #[test]
    fn basic_rejects_non_positive_inputs() {
        for (d, s, h) in [(0.0, 50.0, 4.0), (1200.0, -1.0, 4.0), (1200.0, 50.0, 0.0)] {
            let err = basic(d, s, h).unwrap_err();
            assert!(matches!(err, restock_core::EngineError::InvalidParameter(_)));
        }
    }

    #[test]
    fn basic_rejects_nan() {
        let err = basic(f64::NAN, 50.0, 4.0).unwrap_err();
        assert!(matches!(err, restock_core::EngineError::InvalidParameter(_)));
    }

    #[test]
    fn shortage_max_inventory_never_exceeds_quantity() {
        let result = with_shortages(1200.0, 50.0, 4.0, 2.0).unwrap();
        assert!(result.max_inventory <= result.optimal_quantity);
        assert!(result.max_shortage >= 0.0);
        assert!(result.in_stock_fraction > 0.0 && result.in_stock_fraction <= 1.0);
    }

    #[test]
    fn shortage_cost_rejects_non_positive_shortage_cost() {
        let err = with_shortages(1200.0, 50.0, 4.0, 0.0).unwrap_err();
        assert!(matches!(err, restock_core::EngineError::InvalidParameter(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: ordering cost equals holding cost at the optimum.
            #[test]
            fn ordering_cost_equals_holding_cost_at_optimum(
                demand in 1.0..1e6_f64,
                order_cost in 0.01..1e4_f64,
                holding_cost in 0.01..1e4_f64,
            ) {
                let result = basic(demand, order_cost, holding_cost).unwrap();
                let q = result.optimal_quantity;
                let ordering = demand * order_cost / q;
                let holding = holding_cost * q / 2.0;
                let scale = ordering.abs().max(1.0);
                prop_assert!((ordering - holding).abs() / scale < 1e-9);
            }

            /// Property: as shortage cost grows, the shortage model converges
            /// to the basic model and the permitted backlog vanishes.
            #[test]
            fn shortage_model_converges_to_basic(
                demand in 1.0..1e5_f64,
                order_cost in 0.01..1e3_f64,
                holding_cost in 0.01..1e3_f64,
            ) {
                let base = basic(demand, order_cost, holding_cost).unwrap();
                let huge_p = holding_cost * 1e9;
                let s = with_shortages(demand, order_cost, holding_cost, huge_p).unwrap();
                let q = base.optimal_quantity;
                prop_assert!((s.optimal_quantity - q).abs() / q < 1e-6);
                prop_assert!(s.max_shortage / q < 1e-6);
            }

            /// Property: total cost at Q* is never above the cost at nearby
            /// quantities (Q* is a minimum of the cost function).
            #[test]
            fn optimum_minimizes_cost(
                demand in 1.0..1e5_f64,
                order_cost in 0.01..1e3_f64,
                holding_cost in 0.01..1e3_f64,
                perturbation in 0.5..2.0_f64,
            ) {
                let result = basic(demand, order_cost, holding_cost).unwrap();
                let q = result.optimal_quantity;
                let other = q * perturbation;
                let cost_at = |quantity: f64| {
                    demand * order_cost / quantity + holding_cost * quantity / 2.0
                };
                let slack = 1e-9 * result.cost_per_unit_time.max(1.0);
                prop_assert!(result.cost_per_unit_time <= cost_at(other) + slack);
            }
        }
    }
}
