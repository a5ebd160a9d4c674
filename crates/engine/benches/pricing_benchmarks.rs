use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pricemind_engine::{
    CalculationMethod, DirectCost, FixedCostConfig, PricingInput, Product, ProfitTarget,
};

/// Catalog with an even split of percentage and cost-plus products; the
/// percentage half shares revenue equally so validation always passes.
fn catalog(size: usize) -> PricingInput {
    let percentage_count = (size / 2).max(1);
    let share = 100.0 / percentage_count as f64;

    let mut products = Vec::with_capacity(size);
    for i in 0..size {
        let is_percentage = i < percentage_count;
        products.push(Product {
            name: format!("product-{i}"),
            calculation_method: if is_percentage {
                CalculationMethod::Percentage
            } else {
                CalculationMethod::CostPlus
            },
            revenue_share_percent: if is_percentage { share } else { 0.0 },
            cost_per_unit: 5.0 + (i % 7) as f64,
            expected_units: 10.0 + (i % 13) as f64,
            direct_costs: vec![DirectCost {
                description: "materials".to_string(),
                amount: (i % 5) as f64 * 10.0,
            }],
        });
    }

    PricingInput {
        products,
        fixed_costs: FixedCostConfig::Total(25_000.0),
        profit_target: ProfitTarget::Margin { percent: 20.0 },
    }
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for size in [4usize, 64, 512] {
        let input = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(input).compute().unwrap());
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let input = catalog(512);
    c.bench_function("validate/512", |b| {
        b.iter(|| black_box(&input).validate().unwrap());
    });
}

criterion_group!(benches, bench_compute, bench_validate);
criterion_main!(benches);
