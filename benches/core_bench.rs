use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use heat_track_editor::core::{divide_into_segments, offset_polyline};
use heat_track_editor::{build_draw_list, BorderSide, RenderOptions, TrackModel};
use std::hint::black_box;

/// Geschlossene, leicht gewellte Schleife mit `point_count` Punkten.
fn build_synthetic_centerline(point_count: usize) -> Vec<Vec2> {
    (0..=point_count)
        .map(|i| {
            let angle = i as f32 / point_count as f32 * std::f32::consts::TAU;
            let radius = 2000.0 + 150.0 * (angle * 5.0).sin();
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn build_track_with_curves(point_count: usize) -> TrackModel {
    let mut track = TrackModel::generate(build_synthetic_centerline(point_count), 200.0, 100.0)
        .expect("Synthetischer Track muss generierbar sein");
    let count = track.segment_count() as u32;
    for number in (1..=count).step_by(7) {
        track
            .toggle_curve(number, 3)
            .expect("Segment muss existieren");
    }
    track
}

fn bench_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_polyline");

    for &point_count in &[1_000usize, 10_000usize] {
        let centerline = build_synthetic_centerline(point_count);
        group.bench_with_input(
            BenchmarkId::new("full_border", point_count),
            &centerline,
            |b, points| {
                b.iter(|| black_box(offset_polyline(black_box(points), 100.0, BorderSide::Left)))
            },
        );
    }

    let centerline = build_synthetic_centerline(1_000);
    group.bench_function("short_slices", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for window in centerline.chunks(25) {
                total += offset_polyline(black_box(window), 90.0, BorderSide::Right).len();
            }
            black_box(total)
        })
    });

    group.finish();
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for &point_count in &[1_000usize, 10_000usize] {
        let centerline = build_synthetic_centerline(point_count);
        group.bench_with_input(
            BenchmarkId::new("divide_into_segments", point_count),
            &centerline,
            |b, points| {
                b.iter(|| {
                    let segments = divide_into_segments(black_box(points), 100.0, 200.0)
                        .expect("Segmentierung fehlgeschlagen");
                    black_box(segments.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_curve_distances(c: &mut Criterion) {
    let track = build_track_with_curves(1_000);

    c.bench_function("recompute_curve_distances", |b| {
        b.iter_batched(
            || track.clone(),
            |mut track| {
                track.recompute_curve_distances();
                black_box(track.segment_count())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_draw_list(c: &mut Criterion) {
    let mut track = build_track_with_curves(1_000);
    for number in (2..=track.segment_count() as u32).step_by(3) {
        track.cycle_kerb(number).expect("Segment muss existieren");
    }
    let options = RenderOptions::default();

    c.bench_function("build_draw_list", |b| {
        b.iter(|| black_box(build_draw_list(black_box(&track), &options).len()))
    });
}

criterion_group!(
    benches,
    bench_offset,
    bench_segmentation,
    bench_curve_distances,
    bench_draw_list
);
criterion_main!(benches);
