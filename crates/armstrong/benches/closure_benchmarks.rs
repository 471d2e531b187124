//! Closure propagation benchmarks.
//!
//! Measures graph construction and single closure computations on chain
//! and fan-in relations of increasing width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use armstrong::{AttributeSet, FunctionalDependency, Relation};

/// Attribute labels `a0`, `a1`, ...
fn attributes(width: usize) -> Vec<String> {
    (0..width).map(|i| format!("a{}", i)).collect()
}

/// a0 -> a1 -> a2 -> ... : every closure walks the whole chain.
fn chain_relation(width: usize) -> Relation {
    let names = attributes(width);
    let dependencies = names
        .windows(2)
        .map(|pair| FunctionalDependency::new([pair[0].as_str()], [pair[1].as_str()]));
    Relation::new(names.iter().map(String::as_str).collect::<AttributeSet>(), dependencies)
        .unwrap()
}

/// Pairs (a_i, a_i+1) -> a_i+2: exercises combination nodes.
fn fan_in_relation(width: usize) -> Relation {
    let names = attributes(width);
    let dependencies = names.windows(3).map(|w| {
        FunctionalDependency::new([w[0].as_str(), w[1].as_str()], [w[2].as_str()])
    });
    Relation::new(names.iter().map(String::as_str).collect::<AttributeSet>(), dependencies)
        .unwrap()
}

/// Benchmark building relations (validation + graph).
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("relation_build");

    for width in [8, 16, 32, 64].iter() {
        group.throughput(Throughput::Elements(*width as u64));
        group.bench_with_input(BenchmarkId::new("chain", width), width, |b, &width| {
            b.iter(|| black_box(chain_relation(width)))
        });
    }

    group.finish();
}

/// Benchmark one closure from the head of the relation.
fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");

    for width in [8, 16, 32, 64].iter() {
        let chain = chain_relation(*width);
        let seed = AttributeSet::from(["a0"]);
        group.bench_with_input(BenchmarkId::new("chain", width), &chain, |b, relation| {
            b.iter(|| black_box(relation.closure(&seed)))
        });

        let fan_in = fan_in_relation(*width);
        let seed = AttributeSet::from(["a0", "a1"]);
        group.bench_with_input(BenchmarkId::new("fan_in", width), &fan_in, |b, relation| {
            b.iter(|| black_box(relation.closure(&seed)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_closure);
criterion_main!(benches);
