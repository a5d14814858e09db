//! Benchmarks for trie and store operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use snaptrie::{Trie, VersionedStore};
use std::collections::BTreeMap;

fn generate_keys(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("key:{:08}", i).into_bytes()).collect()
}

fn shuffled(keys: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut keys = keys.to_vec();
    keys.shuffle(&mut rng);
    keys
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    for size in [1_000, 10_000] {
        let keys = generate_keys(size);

        group.bench_with_input(BenchmarkId::new("Trie", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = Trie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie = trie.put(key, i as u64);
                }
                black_box(trie)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(key.clone(), i as u64);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [1_000, 10_000] {
        let keys = generate_keys(size);
        let mut trie = Trie::new();
        for (i, key) in keys.iter().enumerate() {
            trie = trie.put(key, i as u64);
        }
        let lookups = shuffled(&keys);

        group.bench_with_input(BenchmarkId::new("Trie", size), &lookups, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(trie.get::<u64>(key));
                }
            });
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    let keys = generate_keys(1_000);

    group.bench_function("put", |b| {
        b.iter(|| {
            let store = VersionedStore::new();
            for (i, key) in keys.iter().enumerate() {
                store.put(key, i as u64);
            }
            black_box(store.latest_version())
        });
    });

    let store = VersionedStore::new();
    for (i, key) in keys.iter().enumerate() {
        store.put(key, i as u64);
    }

    group.bench_function("get_latest", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(store.get::<u64>(key));
            }
        });
    });

    group.bench_function("get_pinned", |b| {
        let version = store.latest_version() / 2;
        b.iter(|| {
            for key in &keys {
                black_box(store.get_at::<u64>(key, version));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_put, bench_get, bench_store);
criterion_main!(benches);
