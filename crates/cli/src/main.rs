//! Batch pricing runner.
//!
//! Reads a snapshot-shaped JSON input document, runs the pricing
//! pipeline, and prints the outcome as JSON on stdout. With a second
//! document of what-if adjustments it prints a scenario comparison
//! instead. Logs go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};

use pricemind_engine::PricingInput;
use pricemind_scenario::Adjustment;

fn main() -> Result<()> {
    pricemind_observability::init();

    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .context("usage: pricemind <input.json> [adjustments.json]")?;
    let adjustments_path = args.next();

    let input: PricingInput = read_json(&input_path)?;

    match adjustments_path {
        Some(path) => {
            let adjustments: Vec<Adjustment> = read_json(&path)?;
            let comparison = pricemind_scenario::compare(&input, &adjustments)?;
            tracing::info!(
                products = input.products.len(),
                adjustments = adjustments.len(),
                revenue_delta = comparison.delta.overall_target_revenue,
                "what-if comparison complete"
            );
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        None => {
            let outcome = input.compute()?;
            tracing::info!(
                products = outcome.products.len(),
                target_revenue = outcome.summary.overall_target_revenue,
                "pricing complete"
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {path}"))
}
