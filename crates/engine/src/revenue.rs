//! Revenue target solving: total cost plus profit policy yields the one
//! revenue figure the whole catalog must earn.

use pricemind_core::{EngineResult, PricingError};
use serde::{Deserialize, Serialize};

use crate::inputs::ProfitTarget;

/// The company-wide revenue target and the profit it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueTarget {
    pub overall_target_revenue: f64,
    pub overall_profit: f64,
}

/// Solve for the revenue figure implied by the cost base and the target.
///
/// A margin is a share of revenue, not of cost, hence the division. A
/// margin of exactly 100 (or more) has no finite solution and is the hard
/// failure boundary; values just below it legally produce an extremely
/// large but finite revenue and are never clamped.
pub fn solve(overall_total_cost: f64, target: &ProfitTarget) -> EngineResult<RevenueTarget> {
    match *target {
        ProfitTarget::Margin { percent } => {
            if percent >= 100.0 {
                return Err(PricingError::invalid_margin(percent));
            }
            let overall_target_revenue = overall_total_cost / (1.0 - percent / 100.0);
            Ok(RevenueTarget {
                overall_target_revenue,
                overall_profit: overall_target_revenue - overall_total_cost,
            })
        }
        ProfitTarget::Amount { amount } => Ok(RevenueTarget {
            overall_target_revenue: overall_total_cost + amount,
            overall_profit: amount,
        }),
    }
}
