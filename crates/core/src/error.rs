//! Pricing domain error model.

use thiserror::Error;

/// Result type used across the pricing domain.
pub type EngineResult<T> = Result<T, PricingError>;

/// Validation-time pricing failure.
///
/// Every variant is recoverable and carries what a caller needs for
/// display. The engine never returns partial output alongside an error:
/// callers keep whatever results they already had.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// Revenue-share percentages of the percentage-priced group do not
    /// round to 100.
    #[error(
        "total revenue percentages for percentage-based products must sum up to 100% (currently {actual_sum:.2}%)"
    )]
    PercentageSumMismatch { actual_sum: f64 },

    /// A margin target at or above 100% of revenue has no finite solution.
    #[error("target margin must be less than 100% (got {percent}%)")]
    InvalidMargin { percent: f64 },

    /// The catalog is empty; there is nothing to price.
    #[error("at least one product is required")]
    EmptyProductList,
}

impl PricingError {
    pub fn percentage_sum_mismatch(actual_sum: f64) -> Self {
        Self::PercentageSumMismatch { actual_sum }
    }

    pub fn invalid_margin(percent: f64) -> Self {
        Self::InvalidMargin { percent }
    }
}
