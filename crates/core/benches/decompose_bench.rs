//! Decomposition and occurrence benchmarks
//!
//! Run with: `cargo bench --bench decompose_bench -p cronspan-core`

use std::time::Duration;

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cronspan_core::{decompose, next_after, to_expression, upcoming, Schedule};

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3_600);
const DAY: Duration = Duration::from_secs(86_400);

type Scenario = (&'static str, Duration, Duration);

const SCENARIOS: &[Scenario] = &[
    ("quarter_hour", Duration::from_secs(15 * 60), Duration::from_secs(5 * 60)),
    ("thirteen_hours", Duration::from_secs(13 * 3_600), Duration::from_secs(90 * 60)),
    ("weekly", Duration::from_secs(7 * 86_400), Duration::ZERO),
    ("half_year", Duration::from_secs(6 * 31 * 86_400), Duration::from_secs(15 * 86_400)),
    ("yearly", Duration::from_secs(365 * 86_400), Duration::from_secs(20 * 60)),
];

// -----------------------------------------------------------------------------
// Decomposition benchmarks
// -----------------------------------------------------------------------------

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for &(name, interval, offset) in SCENARIOS {
        group.bench_with_input(
            BenchmarkId::new("decompose", name),
            &(interval, offset),
            |b, &(interval, offset)| {
                b.iter(|| black_box(decompose(black_box(interval), black_box(offset)).unwrap()));
            },
        );
    }

    group.throughput(Throughput::Elements(24 * 60));
    group.bench_function("minute_sweep_one_day", |b| {
        b.iter(|| {
            for minutes in 1..=24 * 60 {
                black_box(to_expression(black_box(minutes * MINUTE), Duration::ZERO).unwrap());
            }
        });
    });

    group.finish();
}

// -----------------------------------------------------------------------------
// Expression benchmarks
// -----------------------------------------------------------------------------

fn bench_expression(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression");

    let schedule = decompose(15 * MINUTE, 5 * MINUTE).unwrap();
    group.bench_function("format", |b| b.iter(|| black_box(black_box(&schedule).expression())));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(Schedule::parse(black_box("5,20,35,50 * 16 1,7 *")).unwrap()));
    });

    group.finish();
}

// -----------------------------------------------------------------------------
// Occurrence benchmarks
// -----------------------------------------------------------------------------

fn bench_occurrence(c: &mut Criterion) {
    let mut group = c.benchmark_group("occurrence");
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let hourly = decompose(HOUR, 15 * MINUTE).unwrap();
    let monthly = decompose(6 * 31 * DAY, 15 * DAY).unwrap();
    let leap_day = Schedule::parse("0 0 29 2 *").unwrap();

    group.bench_function("next_after_hourly", |b| {
        b.iter(|| black_box(next_after(black_box(&hourly), black_box(&start))));
    });
    group.bench_function("next_after_half_year", |b| {
        b.iter(|| black_box(next_after(black_box(&monthly), black_box(&start))));
    });
    group.bench_function("next_after_leap_day", |b| {
        b.iter(|| black_box(next_after(black_box(&leap_day), black_box(&start))));
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("upcoming_100_hourly", |b| {
        b.iter(|| black_box(upcoming(black_box(&hourly), black_box(&start), 100)));
    });

    group.finish();
}

criterion_group!(benches, bench_decompose, bench_expression, bench_occurrence);
criterion_main!(benches);
