//! `pricemind-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod numeric;
pub mod value_object;

pub use error::{EngineResult, PricingError};
pub use numeric::{round2, safe_units, sanitize_amount};
pub use value_object::ValueObject;
