use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relpath_core::interner::PathInterner;
use relpath_core::RelPath;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn generate_test_paths(count: usize, unique: bool) -> Vec<String> {
    if unique {
        (0..count)
            .map(|i| format!("out/pkg_{}/file_{}.o", i / 16, i))
            .collect()
    } else {
        // Simulate realistic workload with duplicates
        let unique_paths = [
            "src/main.rs",
            "src/lib.rs",
            "tests/test.rs",
            "Cargo.toml",
            "README.md",
        ];

        (0..count)
            .map(|i| unique_paths[i % unique_paths.len()].to_string())
            .collect()
    }
}

fn bench_intern_new_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern_new_paths");

    for count in [10, 100, 1000, 10000] {
        let paths = generate_test_paths(count, true);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &paths, |b, paths| {
            b.iter(|| {
                let interner = PathInterner::with_capacity(capacity(count));
                for s in paths {
                    let _ = interner.intern(black_box(s));
                }
            });
        });
    }

    group.finish();
}

fn bench_intern_vs_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern_vs_construct");

    let paths = generate_test_paths(1000, false);
    let interner = PathInterner::with_capacity(capacity(100));

    group.bench_function("cached_intern", |b| {
        b.iter(|| {
            for s in &paths {
                let _ = interner.intern(black_box(s));
            }
        });
    });

    group.bench_function("validate_each_time", |b| {
        b.iter(|| {
            for s in &paths {
                let _ = RelPath::new(black_box(s));
            }
        });
    });

    group.finish();
}

fn bench_eviction_pressure(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction_pressure");

    let paths = generate_test_paths(1000, true);

    for cap in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(cap), &paths, |b, paths| {
            b.iter(|| {
                let interner = PathInterner::with_capacity(capacity(cap));
                for s in paths {
                    let _ = interner.intern(black_box(s));
                }
            });
        });
    }

    group.finish();
}

fn bench_concurrent_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_access");

    for thread_count in [2, 4, 8] {
        let paths = Arc::new(generate_test_paths(1000, false));
        let interner = Arc::new(PathInterner::with_capacity(capacity(100)));

        group.bench_with_input(
            BenchmarkId::from_parameter(thread_count),
            &thread_count,
            |b, &thread_count| {
                b.iter(|| {
                    let mut handles = vec![];

                    for _ in 0..thread_count {
                        let interner = Arc::clone(&interner);
                        let paths = Arc::clone(&paths);

                        handles.push(thread::spawn(move || {
                            for s in paths.iter() {
                                let _ = interner.intern(s);
                            }
                        }));
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_intern_new_paths,
    bench_intern_vs_construct,
    bench_eviction_pressure,
    bench_concurrent_access
);
criterion_main!(benches);
