//! Conversion pipeline benchmarks
//!
//! Measures the gamut boundary engine on its own and the full pipelines
//! that use it.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hsluv_core::{
    GamutBounds, Hsluv, Hpluv, Rgb, hpluv_to_rgb, hsluv_to_rgb, max_chroma_for_hue,
    max_safe_chroma, rgb_to_hpluv, rgb_to_hsluv,
};

/// Generate test data for benchmarks
fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Rgb::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

fn generate_hsluv_data(count: usize) -> Vec<Hsluv> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Hsluv::new(t * 360.0, (t * 7.0 % 1.0) * 100.0, (t * 13.0 % 1.0) * 100.0)
        })
        .collect()
}

// ============================================================================
// Gamut Boundary Benchmarks
// ============================================================================

fn bench_gamut(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut");

    group.bench_function("bounds", |b| b.iter(|| GamutBounds::new(black_box(53.2))));

    group.bench_function("max_chroma_for_hue", |b| {
        b.iter(|| max_chroma_for_hue(black_box(53.2), black_box(12.2)))
    });

    group.bench_function("max_safe_chroma", |b| {
        b.iter(|| max_safe_chroma(black_box(53.2)))
    });

    // Both maxima from a single set of bounds
    group.bench_function("shared_bounds", |b| {
        b.iter(|| {
            let bounds = GamutBounds::new(black_box(53.2));
            (
                bounds.max_chroma_for_hue(black_box(12.2)),
                bounds.max_safe_chroma(),
            )
        })
    });

    group.finish();
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [100, 1000, 10000].iter() {
        let rgb = generate_rgb_data(*size);
        let hsluv = generate_hsluv_data(*size);
        let hpluv: Vec<Hpluv> = hsluv.iter().map(|c| Hpluv::new(c.h, c.s, c.l)).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_hsluv", size), &rgb, |b, data| {
            b.iter(|| data.iter().map(|&c| rgb_to_hsluv(c)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("rgb_to_hpluv", size), &rgb, |b, data| {
            b.iter(|| data.iter().map(|&c| rgb_to_hpluv(c)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hsluv_to_rgb", size), &hsluv, |b, data| {
            b.iter(|| data.iter().map(|&c| hsluv_to_rgb(c)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hpluv_to_rgb", size), &hpluv, |b, data| {
            b.iter(|| data.iter().map(|&c| hpluv_to_rgb(c)).collect::<Vec<_>>())
        });
    }

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    let rgb = Rgb::new(0.2, 0.55, 0.74);
    group.bench_function("to_hex", |b| b.iter(|| black_box(rgb).to_hex()));

    let hex = rgb.to_hex().expect("in-range color");
    group.bench_function("to_rgb", |b| b.iter(|| black_box(&hex).to_rgb()));

    group.finish();
}

criterion_group!(benches, bench_gamut, bench_pipeline, bench_hex);
criterion_main!(benches);
