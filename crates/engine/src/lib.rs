//! `pricemind-engine` — revenue/cost allocation and pricing pipeline.
//!
//! Pure domain logic only: no IO, no persistence, no logging. Given a
//! shared fixed-cost pool, a product catalog, and a single company-wide
//! profit target, [`PricingInput::compute`] derives a self-consistent
//! price for every product: percentage-priced products earn exactly their
//! assigned share of total revenue, cost-plus products absorb the
//! remaining profit need and fixed-cost burden, and product revenues sum
//! to the one revenue target.
//!
//! The pipeline runs in four passes (cost aggregation → revenue target →
//! allocation split → per-product pricing) and is deterministic: setup
//! forms, what-if tooling, snapshot replay and batch jobs all price
//! through this one implementation.

pub mod allocation;
pub mod costs;
mod engine;
pub mod inputs;
pub mod pricer;
pub mod results;
pub mod revenue;

pub use inputs::{
    CalculationMethod, DirectCost, ExpenseLine, FixedCostConfig, PricingInput, Product,
    ProfitTarget,
};
pub use pricemind_core::{EngineResult, PricingError};
pub use results::{PricingOutcome, PricingSummary, ProductPricing};
