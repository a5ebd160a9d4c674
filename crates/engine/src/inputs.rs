//! Input value objects for one pricing run.
//!
//! Callers (form layers, what-if tooling, batch jobs) construct these per
//! invocation; the engine never retains them. Snapshots persist exactly
//! this shape, so everything here derives serde.

use pricemind_core::{ValueObject, safe_units, sanitize_amount};
use serde::{Deserialize, Serialize};

/// How a product's price is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    /// Priced so the product earns a fixed share of total revenue.
    Percentage,
    /// Priced as unit cost plus an allocated profit/fixed-cost margin.
    CostPlus,
}

/// Itemized product-specific cost.
///
/// The amount is the total for the whole expected run, not per unit; the
/// engine divides by units internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectCost {
    pub description: String,
    pub amount: f64,
}

/// One line of the catalog being priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display only; never interpreted.
    pub name: String,
    pub calculation_method: CalculationMethod,
    /// Share of total revenue this product is entitled to (0–100).
    /// Meaningful only under [`CalculationMethod::Percentage`].
    #[serde(default)]
    pub revenue_share_percent: f64,
    /// Direct unit cost, excluding the itemized direct costs.
    #[serde(default)]
    pub cost_per_unit: f64,
    #[serde(default)]
    pub expected_units: f64,
    #[serde(default)]
    pub direct_costs: Vec<DirectCost>,
}

impl Product {
    /// Unit count used for divisions (zero divides as 1).
    ///
    /// Decisions about whether a group has any units at all use the raw
    /// `expected_units`, never this substitute.
    pub fn safe_units(&self) -> f64 {
        safe_units(self.expected_units)
    }

    /// Sum of the itemized direct costs for the whole run.
    pub fn direct_cost_total(&self) -> f64 {
        self.direct_costs.iter().map(|dc| dc.amount).sum()
    }

    /// Effective cost of one unit: base cost plus the per-unit slice of
    /// the itemized direct costs.
    pub fn unit_cost(&self) -> f64 {
        self.cost_per_unit + self.direct_cost_total() / self.safe_units()
    }

    /// Variable + direct cost of the whole expected run.
    pub fn run_cost(&self) -> f64 {
        self.unit_cost() * self.safe_units()
    }

    /// Currency amount of total revenue this product is entitled to.
    /// Meaningful only for percentage-priced products.
    pub fn revenue_share(&self, overall_target_revenue: f64) -> f64 {
        self.revenue_share_percent / 100.0 * overall_target_revenue
    }

    /// Slice of the fixed-cost pool this product is expected to cover.
    /// Meaningful only for percentage-priced products.
    pub fn fixed_cost_share(&self, actual_fixed_cost: f64) -> f64 {
        self.revenue_share_percent / 100.0 * actual_fixed_cost
    }

    pub(crate) fn sanitized(&self) -> Self {
        Self {
            name: self.name.clone(),
            calculation_method: self.calculation_method,
            revenue_share_percent: sanitize_amount(self.revenue_share_percent),
            cost_per_unit: sanitize_amount(self.cost_per_unit),
            expected_units: sanitize_amount(self.expected_units),
            direct_costs: self
                .direct_costs
                .iter()
                .map(|dc| DirectCost {
                    description: dc.description.clone(),
                    amount: sanitize_amount(dc.amount),
                })
                .collect(),
        }
    }
}

/// One line of an itemized fixed-cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub label: String,
    pub amount: f64,
}

/// Shared fixed-cost pool, independent of unit volume.
///
/// Entered either as a flat monthly figure or as an itemized breakdown
/// whose sum is used instead. Exactly one representation is active at a
/// time; the caller picks, not the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedCostConfig {
    Total(f64),
    Itemized(Vec<ExpenseLine>),
}

impl FixedCostConfig {
    /// The single fixed-cost figure the engine allocates.
    pub fn actual_fixed_cost(&self) -> f64 {
        match self {
            FixedCostConfig::Total(amount) => *amount,
            FixedCostConfig::Itemized(lines) => lines.iter().map(|line| line.amount).sum(),
        }
    }

    pub(crate) fn sanitized(&self) -> Self {
        match self {
            FixedCostConfig::Total(amount) => FixedCostConfig::Total(sanitize_amount(*amount)),
            FixedCostConfig::Itemized(lines) => FixedCostConfig::Itemized(
                lines
                    .iter()
                    .map(|line| ExpenseLine {
                        label: line.label.clone(),
                        amount: sanitize_amount(line.amount),
                    })
                    .collect(),
            ),
        }
    }
}

/// Company-wide profit target for one pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitTarget {
    /// Desired profit as a percentage of revenue (not of cost).
    Margin { percent: f64 },
    /// Desired profit as an absolute currency amount. Negative amounts
    /// are legal: a planned loss is still a target.
    Amount { amount: f64 },
}

impl ProfitTarget {
    pub(crate) fn sanitized(&self) -> Self {
        // NaN means an unparseable field upstream and becomes 0; signed
        // values pass through untouched.
        match *self {
            ProfitTarget::Margin { percent } => ProfitTarget::Margin {
                percent: if percent.is_nan() { 0.0 } else { percent },
            },
            ProfitTarget::Amount { amount } => ProfitTarget::Amount {
                amount: if amount.is_nan() { 0.0 } else { amount },
            },
        }
    }
}

/// Complete input for one pricing run.
///
/// Callers hold one immutable `PricingInput`, rebuild it on every input
/// change, and call [`PricingInput::compute`]. Snapshot save/load and
/// what-if copies reuse this same shape, so every flow prices through
/// the one pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub products: Vec<Product>,
    pub fixed_costs: FixedCostConfig,
    pub profit_target: ProfitTarget,
}

impl PricingInput {
    pub(crate) fn sanitized(&self) -> Self {
        Self {
            products: self.products.iter().map(Product::sanitized).collect(),
            fixed_costs: self.fixed_costs.sanitized(),
            profit_target: self.profit_target.sanitized(),
        }
    }
}

impl ValueObject for Product {}
impl ValueObject for DirectCost {}
impl ValueObject for ExpenseLine {}
impl ValueObject for FixedCostConfig {}
impl ValueObject for ProfitTarget {}
impl ValueObject for PricingInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn widget(units: f64, cost_per_unit: f64, direct_total: f64) -> Product {
        Product {
            name: "Widget".to_string(),
            calculation_method: CalculationMethod::CostPlus,
            revenue_share_percent: 0.0,
            cost_per_unit,
            expected_units: units,
            direct_costs: vec![DirectCost {
                description: "packaging".to_string(),
                amount: direct_total,
            }],
        }
    }

    #[test]
    fn direct_costs_are_run_totals_divided_by_units() {
        let product = widget(10.0, 5.0, 20.0);
        assert_relative_eq!(product.unit_cost(), 7.0);
        assert_relative_eq!(product.run_cost(), 70.0);
    }

    #[test]
    fn zero_units_divide_direct_costs_by_one() {
        let product = widget(0.0, 5.0, 20.0);
        assert_relative_eq!(product.unit_cost(), 25.0);
        assert_relative_eq!(product.run_cost(), 25.0);
    }

    #[test]
    fn itemized_fixed_costs_sum_their_lines() {
        let config = FixedCostConfig::Itemized(vec![
            ExpenseLine {
                label: "rent".to_string(),
                amount: 800.0,
            },
            ExpenseLine {
                label: "insurance".to_string(),
                amount: 200.0,
            },
        ]);
        assert_relative_eq!(config.actual_fixed_cost(), 1000.0);
    }

    #[test]
    fn sanitizing_zeroes_junk_numerics() {
        let mut product = widget(f64::NAN, -5.0, f64::INFINITY);
        product.revenue_share_percent = f64::NAN;
        let clean = product.sanitized();
        assert_eq!(clean.expected_units, 0.0);
        assert_eq!(clean.cost_per_unit, 0.0);
        assert_eq!(clean.direct_costs[0].amount, 0.0);
        assert_eq!(clean.revenue_share_percent, 0.0);
    }

    #[test]
    fn calculation_method_uses_the_snapshot_vocabulary() {
        let json = serde_json::to_string(&CalculationMethod::CostPlus).unwrap();
        assert_eq!(json, "\"cost-plus\"");
        let back: CalculationMethod = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(back, CalculationMethod::Percentage);
    }
}
