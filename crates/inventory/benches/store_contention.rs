use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cellar_inventory::{InMemoryInventoryStore, InventoryFilter, InventoryStore, StockRecord};

fn seeded_store(lots: usize) -> InMemoryInventoryStore {
    let store = InMemoryInventoryStore::new();
    for i in 0..lots {
        let origin = if i % 2 == 0 { "FR" } else { "IT" };
        store
            .register(StockRecord::new(
                i.to_string(),
                format!("producer-{}", i % 10),
                origin,
                2000 + (i % 20) as i32,
                (i as i64 % 500) + 10,
                100,
            ))
            .unwrap();
    }
    store
}

fn bench_stock_movement_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_movement_latency");

    // Benchmark: stock-in followed by stock-out on one lot, no contention
    group.bench_function("store_then_retrieve", |b| {
        let store = seeded_store(1);
        b.iter(|| {
            store.store("0", black_box(1)).unwrap();
            store.retrieve("0", black_box(1)).unwrap();
        });
    });

    // Benchmark: rejected stock-out (insufficient stock path)
    group.bench_function("retrieve_rejected", |b| {
        let store = seeded_store(1);
        b.iter(|| {
            let _ = black_box(store.retrieve("0", black_box(1_000)));
        });
    });

    group.finish();
}

fn bench_contended_movements(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_movements");

    for threads in [2usize, 4, 8].iter() {
        group.throughput(Throughput::Elements((*threads * 100) as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), threads, |b, &n| {
            let store = seeded_store(1);
            b.iter(|| {
                thread::scope(|s| {
                    for _ in 0..n {
                        s.spawn(|| {
                            for _ in 0..100 {
                                store.store("0", 1).unwrap();
                                store.retrieve("0", 1).unwrap();
                            }
                        });
                    }
                });
            });
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for lots in [10usize, 100, 1000].iter() {
        let store = seeded_store(*lots);
        group.throughput(Throughput::Elements(*lots as u64));
        group.bench_with_input(BenchmarkId::new("get_all", lots), lots, |b, _| {
            b.iter(|| black_box(store.get_all().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("price_range", lots), lots, |b, _| {
            let filter = InventoryFilter::price_range(100, 300);
            b.iter(|| black_box(store.find_by_filter(&filter).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_stock_movement_latency,
    bench_contended_movements,
    bench_queries
);
criterion_main!(benches);
