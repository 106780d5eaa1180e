//! Measures comparison and sorting of realistic version strings, including
//! numeric runs too long for any fixed-width integer.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

const VERSIONS: [&str; 12] = [
    "1.0.0",
    "1.0.0-beta.2",
    "0.17.1-beta.1",
    "1.4.5_01+fabric-1.17",
    "18w40b",
    "b1.7.3",
    "13w02a",
    "c0.3.0_01",
    "1.16.5-0.00.5",
    "10.1.0.2",
    "36893488147419103232",
    "2.0.0-SNAPSHOT",
];

fn compare(c: &mut Criterion) {
    c.bench_function("compare semver", |b| {
        b.iter(|| flexver::compare(black_box("1.0.0-rc.1"), black_box("1.0.0")));
    });

    c.bench_function("compare long numeric", |b| {
        let left = "9".repeat(256);
        let right = format!("{}8", "9".repeat(255));
        b.iter(|| flexver::compare(black_box(&left), black_box(&right)));
    });

    c.bench_function("try_compare bytes", |b| {
        b.iter(|| {
            flexver::try_compare(
                black_box(b"1.4.5_01+fabric-1.17".as_slice()),
                black_box(b"1.4.5_02".as_slice()),
            )
        });
    });
}

fn sort(c: &mut Criterion) {
    let versions: Vec<String> = (0..100)
        .flat_map(|i| VERSIONS.iter().map(move |v| format!("{i}.{v}")))
        .collect();

    c.bench_function("sort 1200 versions", |b| {
        b.iter_batched(
            || versions.clone(),
            |mut versions| flexver::sort(&mut versions),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, compare, sort);
criterion_main!(benches);
