use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use moire_field::harmonics::{HarmonicTable, HarmonicTerm};
use moire_field::pattern::{linspace_grid, MoirePatternGenerator};

/// Benchmark pattern generation over a moderately sized grid
fn bench_pattern_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_generation");

    let terms = vec![
        HarmonicTerm::new(1.0, 0.0, 0.5, 0.0),
        HarmonicTerm::new(0.0, 1.0, 0.5, 0.0),
        HarmonicTerm::new(-1.0, -1.0, 0.5, 0.0),
        HarmonicTerm::new(2.0, 0.0, 0.1, 0.3),
        HarmonicTerm::new(0.0, 2.0, 0.1, -0.3),
    ];
    let generator = MoirePatternGenerator::new(HarmonicTable::from_parts(terms, 1.0));
    let (xx, yy) = linspace_grid(-10.0, 10.0, 256, -10.0, 10.0, 256);

    group.bench_function("256x256_five_harmonics", |b| {
        b.iter(|| {
            generator
                .generate(black_box(&xx), black_box(&yy), black_box(0.687))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pattern_generation);
criterion_main!(benches);
