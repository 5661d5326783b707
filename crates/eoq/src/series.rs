//! Numeric series for presentation-layer charts.
//!
//! The engine exposes plain (x, y) sequences only; rendering and any chart
//! state belong to the client.

use restock_core::{EngineError, EngineResult};

use crate::model;

/// One point of a computed series.
pub type Point = (f64, f64);

/// Total cost per unit time as a function of order quantity, sampled at
/// `points` evenly spaced quantities between Q*/4 and 2·Q*.
///
/// The curve is convex with its minimum at Q*, which is always included as
/// a sample so the chart can mark the optimum exactly.
pub fn cost_curve(
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
    points: usize,
) -> EngineResult<Vec<Point>> {
    if points < 2 {
        return Err(EngineError::invalid_parameter(
            "cost curve needs at least 2 points",
        ));
    }
    let optimum = model::basic(demand, order_cost, holding_cost)?.optimal_quantity;

    let lo = optimum / 4.0;
    let hi = optimum * 2.0;
    let step = (hi - lo) / (points - 1) as f64;

    let cost_at =
        |quantity: f64| demand * order_cost / quantity + holding_cost * quantity / 2.0;

    let mut series: Vec<Point> = (0..points)
        .map(|i| {
            let quantity = lo + step * i as f64;
            (quantity, cost_at(quantity))
        })
        .collect();

    series.push((optimum, cost_at(optimum)));
    series.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(series)
}

/// Inventory level over one order cycle at the basic optimum: the sawtooth
/// from Q* down to zero, as (day, level) pairs.
pub fn cycle_profile(
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
    points: usize,
) -> EngineResult<Vec<Point>> {
    if points < 2 {
        return Err(EngineError::invalid_parameter(
            "cycle profile needs at least 2 points",
        ));
    }
    let result = model::basic(demand, order_cost, holding_cost)?;
    let step = result.cycle_time_days / (points - 1) as f64;
    let daily_demand = demand / model::DAYS_PER_YEAR;

    Ok((0..points)
        .map(|i| {
            let day = step * i as f64;
            (day, result.optimal_quantity - daily_demand * day)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_curve_minimum_sits_at_optimum() {
        let series = cost_curve(1200.0, 50.0, 4.0, 50).unwrap();
        let optimum = model::basic(1200.0, 50.0, 4.0).unwrap();
        let (_, min_cost) = series
            .iter()
            .copied()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert!((min_cost - optimum.cost_per_unit_time).abs() < 1e-9);
    }

    #[test]
    fn cycle_profile_runs_from_full_to_empty() {
        let series = cycle_profile(1200.0, 50.0, 4.0, 20).unwrap();
        let optimum = model::basic(1200.0, 50.0, 4.0).unwrap();
        let first = series.first().unwrap();
        let last = series.last().unwrap();
        assert!((first.1 - optimum.optimal_quantity).abs() < 1e-9);
        assert!(last.1.abs() < 1e-9);
        // The profile spans exactly one model cycle, in the same day units.
        assert!((last.0 - optimum.cycle_time_days).abs() < 1e-9);
    }

    #[test]
    fn series_reject_degenerate_sampling() {
        assert!(cost_curve(1200.0, 50.0, 4.0, 1).is_err());
        assert!(cycle_profile(1200.0, 50.0, 4.0, 0).is_err());
    }
}
