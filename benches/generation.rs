//! Puzzle generation throughput.
//!
//! Generation is rejection sampling, so throughput is the retry rate in
//! disguise - a regression here usually means the compatibility hit rate
//! or the partitioner's attempt failure rate moved.

use criterion::{criterion_group, criterion_main, Criterion};

use queens_engine::{PuzzleConfig, PuzzleGenerator, PuzzleRng, RegionPartitioner, SolutionGenerator};

fn bench_generation(c: &mut Criterion) {
    let config = PuzzleConfig::default();

    c.bench_function("solution_8x8", |b| {
        let generator = SolutionGenerator::new(config.size);
        let mut rng = PuzzleRng::new(0xC0FFEE);
        b.iter(|| generator.generate(&mut rng).unwrap());
    });

    c.bench_function("partition_8x8", |b| {
        let partitioner = RegionPartitioner::with_config(&config);
        let mut rng = PuzzleRng::new(0xC0FFEE);
        b.iter(|| partitioner.generate(&mut rng).unwrap());
    });

    c.bench_function("puzzle_8x8", |b| {
        let generator = PuzzleGenerator::new(config.clone());
        let mut rng = PuzzleRng::new(0xC0FFEE);
        b.iter(|| generator.generate(&mut rng).unwrap());
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
