//! Keyword store benchmarks.
//!
//! Measures replacement and snapshot churn on the watch-backed store. Reads
//! clone the whole keyword list, so `read` cost grows with list size; the
//! trending pane only ever shows a capped slice, which keeps realistic lists
//! small.
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench store_bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use munpul_core::KeywordStore;
use std::hint::black_box;

fn keyword_list(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("키워드-{i}")).collect()
}

fn replace_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_all");

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let store = KeywordStore::new();
            b.iter_batched(
                || keyword_list(size),
                |keywords| store.replace_all(keywords),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn read_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in [10usize, 100, 1_000] {
        let store = KeywordStore::new();
        store.replace_all(keyword_list(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.read()))
        });
    }

    group.finish();
}

criterion_group!(benches, replace_bench, read_bench);
criterion_main!(benches);
