//! The two engine entry points: cheap validation and the full pipeline.

use pricemind_core::{EngineResult, PricingError};

use crate::allocation;
use crate::costs;
use crate::inputs::{PricingInput, ProfitTarget};
use crate::pricer;
use crate::results::{PricingOutcome, PricingSummary};
use crate::revenue;

impl PricingInput {
    /// Cheap pre-check so callers can surface errors without running the
    /// full pipeline.
    ///
    /// [`PricingInput::compute`] fails with exactly the same error on the
    /// same input, so a caller that validates first never gets a surprise
    /// later.
    pub fn validate(&self) -> EngineResult<()> {
        if self.products.is_empty() {
            return Err(PricingError::EmptyProductList);
        }
        allocation::validate_percentage_shares(&self.products)?;
        if let ProfitTarget::Margin { percent } = self.profit_target {
            if percent >= 100.0 {
                return Err(PricingError::invalid_margin(percent));
            }
        }
        Ok(())
    }

    /// Run the full pricing pipeline: cost aggregation, revenue target
    /// solving, group allocation, per-product pricing.
    ///
    /// Pure and deterministic; identical input yields identical output
    /// and nothing is retained between calls. On error no partial result
    /// exists: callers keep whatever they already had.
    pub fn compute(&self) -> EngineResult<PricingOutcome> {
        self.validate()?;
        let input = self.sanitized();

        let totals = costs::aggregate(&input.products, &input.fixed_costs);
        let target = revenue::solve(totals.overall_total_cost, &input.profit_target)?;
        let split = allocation::allocate(&input.products, totals.actual_fixed_cost, &target)?;
        let products =
            pricer::price_products(&input.products, totals.actual_fixed_cost, &target, &split);

        Ok(PricingOutcome {
            summary: PricingSummary {
                actual_fixed_cost: totals.actual_fixed_cost,
                total_variable_and_direct_cost: totals.total_variable_and_direct_cost,
                overall_total_cost: totals.overall_total_cost,
                overall_target_revenue: target.overall_target_revenue,
                overall_profit: target.overall_profit,
            },
            products,
        })
    }
}
