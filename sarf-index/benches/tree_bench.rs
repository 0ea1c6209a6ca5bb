use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sarf_index::{RootIndex, RootKey};

fn random_root(rng: &mut StdRng) -> RootKey {
    let root: String = (0..3)
        .map(|_| char::from_u32(rng.gen_range(0x0621u32..=0x064A)).unwrap())
        .collect();
    root.parse().unwrap()
}

fn build_dataset(count: usize, seed: u64) -> Vec<RootKey> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_root(&mut rng)).collect()
}

fn load_index(keys: &[RootKey]) -> RootIndex {
    let mut index = RootIndex::new();
    for key in keys.iter().cloned() {
        index.insert(key);
    }
    index
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_index_build");
    for &size in &[500usize, 2_000, 8_000] {
        let keys = build_dataset(size, 42);
        group.bench_function(BenchmarkId::new("bulk_insert", size), |b| {
            b.iter(|| load_index(&keys))
        });
    }
    group.finish();

    let keys = build_dataset(2_000, 42);
    let index = load_index(&keys);
    let probes = build_dataset(1_000, 99);

    c.bench_function("root_index_get", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for probe in &probes {
                if index.get(probe).is_some() {
                    hits += 1;
                }
            }
            hits
        })
    });

    c.bench_function("root_index_inorder_walk", |b| b.iter(|| index.iter().count()));
}

criterion_group!(benches, bench_tree);
criterion_main!(benches);
