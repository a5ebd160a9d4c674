//! Output value objects of one pricing run.

use pricemind_core::ValueObject;
use serde::{Deserialize, Serialize};

use crate::inputs::CalculationMethod;

/// Final pricing line for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPricing {
    pub name: String,
    pub calculation_method: CalculationMethod,
    /// Per-unit selling price, rounded to two decimals.
    pub price: f64,
    /// Units to sell to earn the assigned revenue share at the rounded
    /// price. Only produced for percentage-priced products.
    pub units_needed: Option<u64>,
    pub profit_per_unit: f64,
    /// Margin actually achieved at the rounded price, as a percentage of
    /// this product's revenue. Rounding can make this drift slightly from
    /// the nominal share.
    pub percentage_revenue_achieved: f64,
    /// Slice of the fixed-cost pool this product carries.
    pub allocated_fixed_cost_share: f64,
}

/// Run-level totals of one pricing invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub actual_fixed_cost: f64,
    pub total_variable_and_direct_cost: f64,
    pub overall_total_cost: f64,
    pub overall_target_revenue: f64,
    pub overall_profit: f64,
}

/// Everything one `compute` call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingOutcome {
    pub summary: PricingSummary,
    pub products: Vec<ProductPricing>,
}

impl ValueObject for ProductPricing {}
impl ValueObject for PricingSummary {}
impl ValueObject for PricingOutcome {}
