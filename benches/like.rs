// std imports
use std::hint::black_box;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};

// local imports
use extkit::{Pattern, StrExt};

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("like");
    let pattern = Pattern::new("_*").unwrap();
    let digits = Pattern::new("REQ-####-[A-F]?").unwrap();

    c.bench_function("compile", |b| {
        b.iter(|| Pattern::new(black_box("REQ-####-[!A-F]*")).unwrap());
    });
    c.bench_function("short-match", |b| {
        b.iter(|| {
            assert!(pattern.matches(black_box("_TEST")));
        });
    });
    c.bench_function("long-match", |b| {
        b.iter(|| {
            assert!(pattern.matches(black_box("_TEST_SOME_VERY_VERY_LONG_NAME")));
        });
    });
    c.bench_function("short-non-match", |b| {
        b.iter(|| {
            assert!(!pattern.matches(black_box("TEST")));
        });
    });
    c.bench_function("list-match", |b| {
        b.iter(|| {
            assert!(digits.matches(black_box("REQ-2024-C7")));
        });
    });
    c.bench_function("compile-and-match", |b| {
        b.iter(|| {
            assert!(black_box("REQ-2024-C7").is_like("REQ-####-[A-F]?").unwrap());
        });
    });
    c.bench_function("compare-long-match", |b| {
        let what = String::from("_TEST_SOME_VERY_VERY_LONG_NAME");
        b.iter(|| {
            assert!(black_box(&what).starts_with('_'));
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
