//! Final per-unit pricing, including the degenerate-case fallbacks for
//! cost-plus products.

use pricemind_core::round2;

use crate::allocation::Allocation;
use crate::inputs::{CalculationMethod, Product};
use crate::results::ProductPricing;
use crate::revenue::RevenueTarget;

/// Markup applied when the allocated cost-plus profit per unit is
/// unusable (non-positive or non-finite).
const FALLBACK_MARKUP: f64 = 0.20;
/// Flat per-unit profit when even the markup base is zero.
const FALLBACK_FLAT_PROFIT: f64 = 5.0;
/// Markup for a cost-plus product whose own expected units are zero.
const IDLE_PRODUCT_MARKUP: f64 = 0.05;
/// Flat per-unit profit for a zero-unit, zero-cost product.
const IDLE_PRODUCT_FLAT_PROFIT: f64 = 1.0;

/// Price every product against the solved revenue target and allocation
/// split. Infallible: all degeneracies are absorbed by the fallbacks.
pub fn price_products(
    products: &[Product],
    actual_fixed_cost: f64,
    target: &RevenueTarget,
    allocation: &Allocation,
) -> Vec<ProductPricing> {
    products
        .iter()
        .map(|product| match product.calculation_method {
            CalculationMethod::Percentage => {
                price_percentage(product, actual_fixed_cost, target)
            }
            CalculationMethod::CostPlus => price_cost_plus(product, allocation),
        })
        .collect()
}

fn price_percentage(
    product: &Product,
    actual_fixed_cost: f64,
    target: &RevenueTarget,
) -> ProductPricing {
    let safe_units = product.safe_units();
    let revenue_share = product.revenue_share(target.overall_target_revenue);
    let price = round2(revenue_share / safe_units);
    let units_needed = if price > 0.0 {
        (revenue_share / price).ceil() as u64
    } else {
        0
    };

    // Diagnostics are recomputed from the rounded price, so the achieved
    // margin can diverge slightly from the nominal share.
    let product_revenue = price * safe_units;
    let fixed_share = product.fixed_cost_share(actual_fixed_cost);
    let product_total_cost = product.run_cost() + fixed_share;
    let percentage_revenue_achieved = if product_revenue > 0.0 {
        (product_revenue - product_total_cost) / product_revenue * 100.0
    } else {
        0.0
    };

    ProductPricing {
        name: product.name.clone(),
        calculation_method: product.calculation_method,
        price,
        units_needed: Some(units_needed),
        profit_per_unit: (product_revenue - product_total_cost) / safe_units,
        percentage_revenue_achieved,
        allocated_fixed_cost_share: fixed_share,
    }
}

fn price_cost_plus(product: &Product, allocation: &Allocation) -> ProductPricing {
    let safe_units = product.safe_units();
    let unit_cost = product.unit_cost();
    let raw_profit_per_unit =
        allocation.per_unit_profit_cost_plus + allocation.per_unit_fixed_cost_plus;

    let profit_per_unit = cost_plus_profit_per_unit(product, raw_profit_per_unit);
    let price = round2(unit_cost + profit_per_unit);

    let fixed_share = allocation.per_unit_fixed_cost_plus * safe_units;
    let product_revenue = price * safe_units;
    let product_total_cost = unit_cost * safe_units + fixed_share;
    let percentage_revenue_achieved = if product_revenue > 0.0 {
        (product_revenue - product_total_cost) / product_revenue * 100.0
    } else {
        0.0
    };

    ProductPricing {
        name: product.name.clone(),
        calculation_method: product.calculation_method,
        price,
        units_needed: None,
        profit_per_unit,
        percentage_revenue_achieved,
        allocated_fixed_cost_share: fixed_share,
    }
}

/// Per-unit profit for a cost-plus product, with the fallbacks applied in
/// priority order.
///
/// The constants are long-standing business policy carried over from the
/// spreadsheet era, not tuning parameters; see DESIGN.md before changing
/// them.
fn cost_plus_profit_per_unit(product: &Product, raw: f64) -> f64 {
    // Unusable allocation: the group owes nothing (or a negative amount),
    // or the split degenerated. A default markup keeps the price finite.
    if !raw.is_finite() || raw <= 0.0 {
        let markup = product.unit_cost() * FALLBACK_MARKUP;
        return if markup == 0.0 {
            FALLBACK_FLAT_PROFIT
        } else {
            markup
        };
    }

    // The group has units, this product doesn't: it gets a token margin
    // instead of a share of a burden it cannot carry.
    if product.expected_units == 0.0 {
        return if product.unit_cost() > 0.0 {
            product.unit_cost() * IDLE_PRODUCT_MARKUP
        } else {
            IDLE_PRODUCT_FLAT_PROFIT
        };
    }

    raw
}
