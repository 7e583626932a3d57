//! Performance benchmarks for the solution model and its classifiers
//!
//! Every slider drag goes through mutation → recompute → classifiers → narration,
//! so the whole chain has to stay far below a frame budget.
//!
//! # What We're Measuring
//!
//! 1. **Classification**: `RegionTable::classify` on tables of growing size
//! 2. **Mutation**: one accepted `Solution::set_volume` with and without classifiers
//! 3. **Full action**: `MolaritySimulation::set_volume`, narration included
//! 4. **Analysis**: `SaturationCurve::sample` at growing resolutions
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench describer_performance
//!
//! # Parallel curve sampling
//! cargo bench --bench describer_performance --features parallel curve
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use molarity::analysis::SaturationCurve;
use molarity::chemistry::SoluteCatalog;
use molarity::config::SimulationConfig;
use molarity::describers::{Describers, RegionTable};
use molarity::model::Solution;
use molarity::simulation::MolaritySimulation;

/// Volumes visited by a slider sweep, alternating direction so every call changes the value
fn sweep_volumes(steps: usize) -> Vec<f64> {
    (0..steps)
        .map(|i| {
            let t = (i % 100) as f64 / 100.0;
            if (i / 100) % 2 == 0 { 0.2 + 0.8 * t } else { 1.0 - 0.8 * t }
        })
        .collect()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Region classification");

    for slices in [5, 6, 50, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(slices), slices, |b, &slices| {
            let table = RegionTable::uniform("bench", 5.0, slices, true, 3).unwrap();
            let values: Vec<f64> = (0..1000).map(|i| i as f64 * 0.005).collect();

            b.iter(|| {
                values
                    .iter()
                    .map(|v| table.classify(black_box(*v)))
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

fn benchmark_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solution mutation");
    let catalog = SoluteCatalog::standard().unwrap();
    let volumes = sweep_volumes(1000);

    group.bench_function("model only", |b| {
        let mut solution =
            Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
        b.iter(|| {
            for volume in &volumes {
                black_box(solution.set_volume(black_box(*volume)).unwrap());
            }
        });
    });

    group.bench_function("model + classifiers", |b| {
        let mut solution =
            Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
        let mut describers = Describers::new(&solution).unwrap();
        b.iter(|| {
            for volume in &volumes {
                if let Some(change) = solution.set_volume(black_box(*volume)).unwrap() {
                    describers.observe(&change).unwrap();
                }
            }
        });
    });

    group.bench_function("full action", |b| {
        let mut simulation = MolaritySimulation::standard().unwrap();
        b.iter(|| {
            for volume in &volumes {
                black_box(simulation.set_volume(black_box(*volume)).unwrap());
            }
        });
    });

    group.finish();
}

fn benchmark_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Saturation curve");
    let catalog = SoluteCatalog::standard().unwrap();
    let config = SimulationConfig::default();

    for points in [101, 1001, 10001].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(points), points, |b, &points| {
            b.iter(|| {
                SaturationCurve::sample(catalog.first(), black_box(3.0), &config, points).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_classification,
    benchmark_mutation,
    benchmark_curve
);
criterion_main!(benches);
