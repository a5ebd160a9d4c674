//! Value object trait: equality by value, not identity.

/// Marker trait for pricing value objects.
///
/// Everything the engine consumes or produces is an immutable value: two
/// inputs with the same fields are the same input, and recomputing from an
/// equal value yields an equal result. Nothing in the pipeline carries
/// identity or lives beyond a single invocation.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
