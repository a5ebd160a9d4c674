//! Tracing/logging setup shared by the pricemind binaries.
//!
//! The engine crates stay log-free; logging belongs to the process edge.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
