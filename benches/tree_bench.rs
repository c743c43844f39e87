//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbor::AvlTree;

fn bench_insert_ascending(c: &mut Criterion) {
    c.bench_function("insert_ascending_1k", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in 0..1_000i64 {
                tree.insert(black_box(key));
            }
            black_box(tree.height())
        });
    });
}

fn bench_churn(c: &mut Criterion) {
    c.bench_function("churn_insert_remove_1k", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in 0..1_000i64 {
                tree.insert(black_box(key));
            }
            for key in (0..1_000i64).step_by(2) {
                tree.remove(black_box(key));
            }
            black_box(tree.height())
        });
    });
}

fn bench_search_path(c: &mut Criterion) {
    let mut tree = AvlTree::new();
    for key in 0..4_096i64 {
        tree.insert(key);
    }

    c.bench_function("search_path_4k", |b| {
        b.iter(|| {
            for probe in [0i64, 1_234, 2_048, 4_095, 9_999] {
                black_box(tree.search_path(black_box(probe)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_insert_ascending,
    bench_churn,
    bench_search_path
);
criterion_main!(benches);
