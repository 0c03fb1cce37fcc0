use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use towersort::prelude::*;
use towersort::CAPACITY;

fn random_components(count: usize) -> Vec<Component> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let name: String = (0..rng.random_range(3..12))
                .map(|_| rng.random_range(b'A'..=b'z') as char)
                .collect();
            let kind: String = (0..rng.random_range(3..8))
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect();
            Component::new(&name, &kind, rng.random_range(1..=10)).unwrap()
        })
        .collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Collection Sort");

    let input = random_components(CAPACITY);

    group.bench_function("bubble sort by name", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort_by_name(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("insertion sort by type", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort_by_kind(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("selection sort by priority", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort_by_priority(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable) with the same key, for scale.
    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_by(|x, y| compare_ignore_case(x.name(), y.name())),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Binary Search");

    let mut input = random_components(CAPACITY);
    sort_by_name(&mut input);
    let keys: Vec<String> = input.iter().map(|c| c.name().to_uppercase()).collect();

    group.bench_function("search every name", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(search_by_name(black_box(&input), key));
            }
        })
    });

    group.bench_function("search missing name", |b| {
        b.iter(|| black_box(search_by_name(black_box(&input), "~absent~")))
    });

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_search);
criterion_main!(benches);
