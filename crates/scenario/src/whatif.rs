//! Hypothetical runs: adjust a copy of the live input, price both, diff
//! the summaries.

use serde::{Deserialize, Serialize};

use pricemind_engine::{
    EngineResult, FixedCostConfig, PricingInput, PricingOutcome, PricingSummary,
};

/// One knob a what-if scenario may turn on a copy of the live input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// Replace the fixed-cost pool.
    FixedCosts(FixedCostConfig),
    /// Override one product's direct unit cost.
    CostPerUnit { product: String, value: f64 },
    /// Override one product's expected sales volume.
    ExpectedUnits { product: String, value: f64 },
}

/// Copy the input with the given adjustments applied, in order.
///
/// Adjustments naming a product that is not in the catalog are skipped:
/// a scenario drawn up against a stale snapshot still prices the rest.
pub fn apply_adjustments(input: &PricingInput, adjustments: &[Adjustment]) -> PricingInput {
    let mut variant = input.clone();
    for adjustment in adjustments {
        match adjustment {
            Adjustment::FixedCosts(config) => variant.fixed_costs = config.clone(),
            Adjustment::CostPerUnit { product, value } => {
                if let Some(p) = variant.products.iter_mut().find(|p| p.name == *product) {
                    p.cost_per_unit = *value;
                }
            }
            Adjustment::ExpectedUnits { product, value } => {
                if let Some(p) = variant.products.iter_mut().find(|p| p.name == *product) {
                    p.expected_units = *value;
                }
            }
        }
    }
    variant
}

/// Field-by-field difference between two run summaries (variant − base).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryDelta {
    pub actual_fixed_cost: f64,
    pub total_variable_and_direct_cost: f64,
    pub overall_total_cost: f64,
    pub overall_target_revenue: f64,
    pub overall_profit: f64,
}

impl SummaryDelta {
    pub fn between(base: &PricingSummary, variant: &PricingSummary) -> Self {
        Self {
            actual_fixed_cost: variant.actual_fixed_cost - base.actual_fixed_cost,
            total_variable_and_direct_cost: variant.total_variable_and_direct_cost
                - base.total_variable_and_direct_cost,
            overall_total_cost: variant.overall_total_cost - base.overall_total_cost,
            overall_target_revenue: variant.overall_target_revenue - base.overall_target_revenue,
            overall_profit: variant.overall_profit - base.overall_profit,
        }
    }
}

/// Outcome of pricing the live input and one adjusted copy side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub base: PricingOutcome,
    pub variant: PricingOutcome,
    pub delta: SummaryDelta,
}

/// Price the live input and an adjusted copy, and diff the summaries.
///
/// Fails if either run fails validation; no partial comparison exists.
pub fn compare(
    base: &PricingInput,
    adjustments: &[Adjustment],
) -> EngineResult<ScenarioComparison> {
    let base_outcome = base.compute()?;
    let variant_outcome = apply_adjustments(base, adjustments).compute()?;
    let delta = SummaryDelta::between(&base_outcome.summary, &variant_outcome.summary);

    Ok(ScenarioComparison {
        base: base_outcome,
        variant: variant_outcome,
        delta,
    })
}
