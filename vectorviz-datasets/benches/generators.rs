//! Benchmarks for the dataset generators at increasing sample counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vectorviz_datasets::{
    make_moons, make_spiral, make_swiss_roll, make_two_layer_radial, MoonsConfig, RadialConfig,
    SpiralConfig, SwissRollConfig, TwoLayerRadialConfig,
};

fn bench_generators(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("generators");

    for &size in &sizes {
        let moons = MoonsConfig::default().with_samples(size).with_noise(0.1);
        group.bench_with_input(BenchmarkId::new("moons", size), &moons, |b, config| {
            b.iter(|| make_moons(black_box(config)))
        });

        let spiral = SpiralConfig::default().with_arms(4, size / 4).with_noise(0.1);
        group.bench_with_input(BenchmarkId::new("spiral", size), &spiral, |b, config| {
            b.iter(|| make_spiral(black_box(config)))
        });

        let roll = SwissRollConfig::default().with_samples(size).with_thickness(0.1);
        group.bench_with_input(BenchmarkId::new("swiss_roll", size), &roll, |b, config| {
            b.iter(|| make_swiss_roll(black_box(config)))
        });

        let radial = TwoLayerRadialConfig {
            inner: RadialConfig::default().with_arms(4, size / 8),
            ..TwoLayerRadialConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("two_layer_radial", size), &radial, |b, config| {
            b.iter(|| make_two_layer_radial(black_box(config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
