//! Benchmarks for inventory repository operations

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use inventory::{codec, InventoryRepository, ServerInput, Store};
use tempfile::TempDir;

fn sample() -> ServerInput {
    ServerInput::new("web01.example.com", "10.0.0.1", &["web", "prod", "eu-west"])
}

fn storage_benchmarks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(&temp_dir.path().join("bench.db")).unwrap();
    let repo = InventoryRepository::new(Arc::new(store));

    let ids: Vec<String> = (0..1000).map(|_| repo.insert(sample()).unwrap().id).collect();

    c.bench_function("codec_encode_decode", |b| {
        let server = sample().into_server("bench".to_string());
        b.iter(|| codec::decode(&codec::encode(&server).unwrap()).unwrap())
    });

    c.bench_function("repository_insert", |b| {
        b.iter_batched(sample, |input| repo.insert(input).unwrap(), BatchSize::SmallInput)
    });

    c.bench_function("repository_get", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % ids.len();
            repo.get(&ids[i]).unwrap()
        })
    });

    c.bench_function("repository_update", |b| {
        let patch = ServerInput {
            ip: "10.0.0.2".to_string(),
            ..Default::default()
        };
        b.iter(|| repo.update(&ids[0], &patch).unwrap())
    });

    c.bench_function("repository_list_all", |b| b.iter(|| repo.list_all().unwrap()));
}

criterion_group!(benches, storage_benchmarks);
criterion_main!(benches);
