use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use race_track_editor::{parse_track_file, write_track_file, SegmentRecord, Track, TrackOptions};
use std::hint::black_box;

fn build_synthetic_records(segment_count: usize) -> Vec<SegmentRecord> {
    (0..segment_count)
        .map(|index| {
            let x = index as f64 * 90.0;
            let wobble = if index % 2 == 0 { 40.0 } else { -40.0 };
            SegmentRecord::from([
                (x, 0.0),
                (x + 30.0, wobble),
                (x + 60.0, -wobble),
                (x + 90.0, 0.0),
            ])
        })
        .collect()
}

fn bench_track_file_parsing(c: &mut Criterion) {
    let content = write_track_file(&build_synthetic_records(1_000));

    c.bench_function("track_file_parse_1000", |b| {
        b.iter(|| {
            let records = parse_track_file(black_box(&content)).expect("Parse fehlgeschlagen");
            black_box(records.len())
        })
    });
}

fn bench_track_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("track_construction");
    let records = build_synthetic_records(1_000);

    for &sample_count in &[20usize, 200usize] {
        let options = TrackOptions {
            sample_count,
            ..TrackOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::new("load_from_records", sample_count),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut track = Track::with_options(options.clone());
                    track
                        .load_from_records(black_box(&records))
                        .expect("Aufbau fehlgeschlagen");
                    black_box(track.boundary_ribbon().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_track_file_parsing, bench_track_construction);
criterion_main!(benches);
