//! Fixed-cost and profit split between the percentage-revenue group and
//! the cost-plus group.
//!
//! This is a closed-form split executed once per run, not a fixed-point
//! iteration: the percentage group's entitlements are fully determined by
//! their shares of the already-solved revenue target, so whatever profit
//! need and fixed-cost burden remain fall to the cost-plus group.

use pricemind_core::{EngineResult, PricingError, sanitize_amount};

use crate::inputs::{CalculationMethod, Product};
use crate::revenue::RevenueTarget;

/// Outcome of the allocation split, consumed by the per-product pricer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    /// Fixed costs left for the cost-plus group after the percentage
    /// group's proportional slices are taken out.
    pub fixed_share_cost_plus: f64,
    /// Profit the percentage group already generates at its assigned
    /// shares.
    pub profit_from_percentage: f64,
    /// Profit the cost-plus group must deliver to hit the overall target.
    pub profit_needed_from_cost_plus: f64,
    /// Raw unit total of the cost-plus group. Zero-unit products count as
    /// zero here, not one: an all-idle group defers to the pricer's
    /// fallbacks instead of dividing by a substitute.
    pub total_units_cost_plus: f64,
    pub per_unit_profit_cost_plus: f64,
    pub per_unit_fixed_cost_plus: f64,
}

/// Sum of revenue-share percentages over the percentage-priced group.
///
/// Coerces each share the same way the engine boundary does, so a raw
/// (unsanitized) input validates identically to a sanitized one.
pub fn percentage_share_sum(products: &[Product]) -> f64 {
    products
        .iter()
        .filter(|p| p.calculation_method == CalculationMethod::Percentage)
        .map(|p| sanitize_amount(p.revenue_share_percent))
        .sum()
}

/// Check the percentage-group invariant: shares must round to exactly 100.
///
/// An empty percentage group skips the check; the whole catalog is then
/// cost-plus and no revenue entitlement exists to reconcile.
pub fn validate_percentage_shares(products: &[Product]) -> EngineResult<()> {
    let has_percentage = products
        .iter()
        .any(|p| p.calculation_method == CalculationMethod::Percentage);
    if !has_percentage {
        return Ok(());
    }

    let actual_sum = percentage_share_sum(products);
    if actual_sum.round() != 100.0 {
        return Err(PricingError::percentage_sum_mismatch(actual_sum));
    }
    Ok(())
}

/// Split the fixed-cost pool and the profit target between the two groups.
pub fn allocate(
    products: &[Product],
    actual_fixed_cost: f64,
    target: &RevenueTarget,
) -> EngineResult<Allocation> {
    validate_percentage_shares(products)?;

    let mut fixed_share_percentage = 0.0;
    let mut profit_from_percentage = 0.0;
    let mut total_units_cost_plus = 0.0;

    for product in products {
        match product.calculation_method {
            CalculationMethod::Percentage => {
                let fixed_share = product.fixed_cost_share(actual_fixed_cost);
                fixed_share_percentage += fixed_share;
                profit_from_percentage += product.revenue_share(target.overall_target_revenue)
                    - product.run_cost()
                    - fixed_share;
            }
            CalculationMethod::CostPlus => {
                total_units_cost_plus += product.expected_units;
            }
        }
    }

    let fixed_share_cost_plus = actual_fixed_cost - fixed_share_percentage;
    let profit_needed_from_cost_plus = target.overall_profit - profit_from_percentage;

    let (per_unit_profit_cost_plus, per_unit_fixed_cost_plus) = if total_units_cost_plus > 0.0 {
        (
            profit_needed_from_cost_plus / total_units_cost_plus,
            fixed_share_cost_plus / total_units_cost_plus,
        )
    } else {
        (0.0, 0.0)
    };

    Ok(Allocation {
        fixed_share_cost_plus,
        profit_from_percentage,
        profit_needed_from_cost_plus,
        total_units_cost_plus,
        per_unit_profit_cost_plus,
        per_unit_fixed_cost_plus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn percentage(name: &str, share: f64, units: f64, cost_per_unit: f64) -> Product {
        Product {
            name: name.to_string(),
            calculation_method: CalculationMethod::Percentage,
            revenue_share_percent: share,
            cost_per_unit,
            expected_units: units,
            direct_costs: Vec::new(),
        }
    }

    fn cost_plus(name: &str, units: f64, cost_per_unit: f64) -> Product {
        Product {
            name: name.to_string(),
            calculation_method: CalculationMethod::CostPlus,
            revenue_share_percent: 0.0,
            cost_per_unit,
            expected_units: units,
            direct_costs: Vec::new(),
        }
    }

    #[test]
    fn shares_off_one_hundred_are_rejected_with_the_actual_sum() {
        let products = vec![
            percentage("A", 50.0, 10.0, 1.0),
            percentage("B", 45.0, 10.0, 1.0),
        ];
        let err = validate_percentage_shares(&products).unwrap_err();
        assert_eq!(err, PricingError::PercentageSumMismatch { actual_sum: 95.0 });
    }

    #[test]
    fn a_lone_sixty_percent_product_fails_validation() {
        let products = vec![percentage("A", 60.0, 10.0, 0.0), cost_plus("B", 10.0, 50.0)];
        let err = validate_percentage_shares(&products).unwrap_err();
        assert_eq!(err, PricingError::PercentageSumMismatch { actual_sum: 60.0 });
    }

    #[test]
    fn all_cost_plus_catalog_skips_the_share_check() {
        let products = vec![cost_plus("B", 10.0, 50.0)];
        assert!(validate_percentage_shares(&products).is_ok());
    }

    #[test]
    fn shares_within_rounding_distance_of_one_hundred_pass() {
        let products = vec![
            percentage("A", 33.3, 1.0, 0.0),
            percentage("B", 33.3, 1.0, 0.0),
            percentage("C", 33.4, 1.0, 0.0),
        ];
        assert!(validate_percentage_shares(&products).is_ok());
    }

    #[test]
    fn full_percentage_group_absorbs_the_whole_fixed_pool() {
        let products = vec![
            percentage("A", 60.0, 10.0, 0.0),
            percentage("B", 40.0, 5.0, 0.0),
        ];
        let target = RevenueTarget {
            overall_target_revenue: 1000.0,
            overall_profit: 0.0,
        };
        let split = allocate(&products, 1000.0, &target).unwrap();
        assert_relative_eq!(split.fixed_share_cost_plus, 0.0);
        assert_relative_eq!(split.total_units_cost_plus, 0.0);
    }

    #[test]
    fn cost_plus_only_catalog_carries_all_fixed_costs_per_unit() {
        let products = vec![cost_plus("B", 10.0, 50.0)];
        let target = RevenueTarget {
            overall_target_revenue: 1500.0,
            overall_profit: 0.0,
        };
        let split = allocate(&products, 1000.0, &target).unwrap();
        assert_relative_eq!(split.fixed_share_cost_plus, 1000.0);
        assert_relative_eq!(split.per_unit_fixed_cost_plus, 100.0);
        assert_relative_eq!(split.per_unit_profit_cost_plus, 0.0);
    }

    #[test]
    fn percentage_surplus_reduces_the_cost_plus_profit_need() {
        // A earns 500 revenue against zero cost and a zero fixed pool, so
        // the cost-plus group owes 500 less than the overall target.
        let products = vec![percentage("A", 100.0, 10.0, 0.0), cost_plus("B", 10.0, 50.0)];
        let target = RevenueTarget {
            overall_target_revenue: 500.0,
            overall_profit: 0.0,
        };
        let split = allocate(&products, 0.0, &target).unwrap();
        assert_relative_eq!(split.profit_from_percentage, 500.0);
        assert_relative_eq!(split.profit_needed_from_cost_plus, -500.0);
        assert_relative_eq!(split.per_unit_profit_cost_plus, -50.0);
    }

    #[test]
    fn zero_unit_cost_plus_group_defers_to_fallbacks() {
        let products = vec![cost_plus("B", 0.0, 50.0)];
        let target = RevenueTarget {
            overall_target_revenue: 1050.0,
            overall_profit: 0.0,
        };
        let split = allocate(&products, 1000.0, &target).unwrap();
        assert_relative_eq!(split.total_units_cost_plus, 0.0);
        assert_relative_eq!(split.per_unit_profit_cost_plus, 0.0);
        assert_relative_eq!(split.per_unit_fixed_cost_plus, 0.0);
        // The burden itself is still reported, just not spread per unit.
        assert_relative_eq!(split.fixed_share_cost_plus, 1000.0);
    }
}
