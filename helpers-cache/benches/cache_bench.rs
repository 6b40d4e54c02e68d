//! Criterion benchmarks for the TTL cache: set, get, drain, cleanup.

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use helpers_cache::{Cache, SetOptions};

const ENTRIES: u64 = 10_000;

fn filled(expired_every: u64) -> Cache<u64> {
    let cache = Cache::with_ttl(Duration::from_secs(3600));
    let past = SetOptions::new().valid_until(Instant::now() - Duration::from_secs(1));
    for i in 0..ENTRIES {
        if expired_every > 0 && i % expired_every == 0 {
            cache.set_with_options(format!("key:{i}"), i, past).unwrap();
        } else {
            cache.set(format!("key:{i}"), i).unwrap();
        }
    }
    cache
}

fn bench_set(c: &mut Criterion) {
    let cache = Cache::with_ttl(Duration::from_secs(3600));
    let mut g = c.benchmark_group("set");
    g.throughput(Throughput::Elements(1));
    g.bench_function("set", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = (i + 1) % ENTRIES;
            cache.set(format!("key:{i}"), black_box(i)).unwrap();
        });
    });
    g.finish();
}

fn bench_get(c: &mut Criterion) {
    let cache = filled(0);
    let mut g = c.benchmark_group("get");
    g.throughput(Throughput::Elements(1));
    g.bench_function("get_hit", |b| {
        b.iter(|| black_box(cache.get("key:4242")).unwrap());
    });
    g.bench_function("get_miss", |b| {
        b.iter(|| black_box(cache.get("missing")).unwrap_err());
    });
    g.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut g = c.benchmark_group("bulk");
    g.throughput(Throughput::Elements(ENTRIES));
    g.bench_function("drain", |b| {
        b.iter_batched(|| filled(4), |cache| black_box(cache.drain()), BatchSize::LargeInput);
    });
    g.bench_function("cleanup", |b| {
        b.iter_batched(|| filled(4), |cache| cache.cleanup(), BatchSize::LargeInput);
    });
    g.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_bulk);
criterion_main!(benches);
