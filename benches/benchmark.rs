use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tristore::construct::Fragment;
use tristore::store::TripleStore;

fn seed_batch(subjects: usize, predicates: usize, objects: usize) -> Vec<Fragment> {
    let mut batch = Vec::with_capacity(subjects * predicates * objects);
    for s in 0..subjects {
        for p in 0..predicates {
            for o in 0..objects {
                if p == 0 && o == 0 {
                    batch.push(Fragment::full(
                        format!("s{s}"),
                        format!("p{p}"),
                        format!("o{o}"),
                    ));
                } else if o == 0 {
                    batch.push(Fragment::tail(format!("p{p}"), format!("o{o}")));
                } else {
                    batch.push(Fragment::last(format!("o{o}")));
                }
            }
        }
    }
    batch
}

fn assert_benchmark(c: &mut Criterion) {
    let batch = seed_batch(100, 10, 10);
    c.bench_function("assert 10k triples", |b| {
        b.iter(|| {
            let mut store = TripleStore::new();
            store.assert(black_box(&batch));
            black_box(store.size())
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let store = TripleStore::with_batch(&seed_batch(100, 10, 10));
    c.bench_function("query bound subject", |b| {
        b.iter(|| black_box(store.query(Some("s50"), None, None).count()))
    });
    c.bench_function("query bound predicate and object", |b| {
        b.iter(|| black_box(store.query(None, Some("p5"), Some("o5")).count()))
    });
    c.bench_function("query full scan", |b| {
        b.iter(|| black_box(store.query(None, None, None).count()))
    });
}

fn turtle_benchmark(c: &mut Criterion) {
    let store = TripleStore::with_batch(&seed_batch(100, 10, 10));
    c.bench_function("turtle full scan", |b| {
        b.iter(|| black_box(store.turtle(None, None, None).count()))
    });
}

criterion_group!(benches, assert_benchmark, query_benchmark, turtle_benchmark);
criterion_main!(benches);
