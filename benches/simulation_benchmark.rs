use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use tariff_impact_engine::analysis::scenario::ScenarioInput;
use tariff_impact_engine::analysis::simulator::ScenarioSimulator;
use tariff_impact_engine::simulation::catalog_gen::{generate_random_catalog, CatalogConfig};

fn bench_single_scenario(c: &mut Criterion) {
    let config = CatalogConfig {
        sector_count: 50,
        market_count: 20,
        ..Default::default()
    };
    let catalog = generate_random_catalog(&config).unwrap();
    let sector_id = catalog.sectors().next().unwrap().id().clone();
    let input = ScenarioInput::new(sector_id, dec!(0.6)).with_mitigation(dec!(0.5));

    c.bench_function("simulate_single_scenario", |b| {
        b.iter(|| ScenarioSimulator::run(black_box(&catalog), black_box(&input)).unwrap())
    });
}

fn bench_catalog_sweep(c: &mut Criterion) {
    let config = CatalogConfig {
        sector_count: 200,
        market_count: 50,
        ..Default::default()
    };
    let catalog = generate_random_catalog(&config).unwrap();
    let inputs: Vec<ScenarioInput> = catalog
        .sectors()
        .map(|s| ScenarioInput::new(s.id().clone(), dec!(0.6)).with_mitigation(dec!(0.3)))
        .collect();

    c.bench_function("simulate_200_sector_sweep", |b| {
        b.iter(|| {
            for input in &inputs {
                ScenarioSimulator::run(black_box(&catalog), black_box(input)).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_single_scenario, bench_catalog_sweep);
criterion_main!(benches);
