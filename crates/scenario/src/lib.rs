//! `pricemind-scenario` — what-if comparisons over the pricing engine.
//!
//! A scenario is a modified copy of the same input shape the setup flow
//! uses; the engine is re-invoked, never extended. Both runs go through
//! the one pipeline, so a hypothetical can never drift from live pricing.

pub mod whatif;

pub use whatif::{Adjustment, ScenarioComparison, SummaryDelta, apply_adjustments, compare};
