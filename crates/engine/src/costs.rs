//! Cost aggregation: the fixed pool plus every product's variable and
//! direct costs.

use serde::{Deserialize, Serialize};

use crate::inputs::{FixedCostConfig, Product};

/// Totals produced by the cost aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostTotals {
    /// Flat total or itemized sum, whichever representation the caller
    /// supplied.
    pub actual_fixed_cost: f64,
    pub total_variable_and_direct_cost: f64,
    pub overall_total_cost: f64,
}

/// Total the fixed-cost pool and every product's run cost.
///
/// Never fails: numerics are coerced at the engine boundary, and zero-unit
/// products cost one unit's worth (their direct costs still exist even if
/// nothing sells).
pub fn aggregate(products: &[Product], fixed_costs: &FixedCostConfig) -> CostTotals {
    let actual_fixed_cost = fixed_costs.actual_fixed_cost();
    let total_variable_and_direct_cost: f64 = products.iter().map(Product::run_cost).sum();

    CostTotals {
        actual_fixed_cost,
        total_variable_and_direct_cost,
        overall_total_cost: actual_fixed_cost + total_variable_and_direct_cost,
    }
}
