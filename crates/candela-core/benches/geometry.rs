//! Benchmark tests for the hot geometry paths.

use candela_core::curve::{area_path, line_path, CurveKind};
use candela_core::radial::{sector_path, ArcSector};
use candela_core::scale::{nice_scale, ScreenPoint};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_points(n: usize) -> Vec<ScreenPoint> {
    (0..n)
        .map(|i| {
            let x = i as f32 * 3.2;
            ScreenPoint::new(x, 100.0 + (x * 0.05).sin() * 80.0, i as i32)
        })
        .collect()
}

fn bench_nice_scale(c: &mut Criterion) {
    c.bench_function("nice_scale", |b| {
        b.iter(|| nice_scale(black_box(3.0), black_box(97.0), black_box(4)))
    });
}

fn bench_monotone_line_path(c: &mut Criterion) {
    let points = sample_points(100);
    c.bench_function("line_path_monotone_100", |b| {
        b.iter(|| line_path(black_box(&points), CurveKind::Monotone))
    });
}

fn bench_linear_area_path(c: &mut Criterion) {
    let points = sample_points(150);
    c.bench_function("area_path_linear_150", |b| {
        b.iter(|| area_path(black_box(&points), CurveKind::Linear, black_box(200.0)))
    });
}

fn bench_sector_path(c: &mut Criterion) {
    let sector = ArcSector {
        cx: 140.0,
        cy: 140.0,
        radius: 100.0,
        stroke_width: 40.0,
        start_angle: -90.0,
        sweep_angle: 230.0,
        corner_radius: 8.0,
    };
    c.bench_function("sector_path_reflex", |b| {
        b.iter(|| sector_path(black_box(&sector)))
    });
}

criterion_group!(
    benches,
    bench_nice_scale,
    bench_monotone_line_path,
    bench_linear_area_path,
    bench_sector_path,
);
criterion_main!(benches);
