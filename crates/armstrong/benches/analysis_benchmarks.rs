//! Full analysis benchmarks.
//!
//! Key enumeration and normal-form scans close every subset of the
//! universe, so these grow as 2^n. Widths stay small.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use armstrong::analysis::{classify, is_dependency_preserving, minimal_keys};
use armstrong::{Armstrong, AttributeSet, FunctionalDependency, Relation};

/// Two interlocking chains over `width` attributes, giving several keys.
fn generate_relation(width: usize) -> Relation {
    let names: Vec<String> = (0..width).map(|i| format!("a{}", i)).collect();
    let mut dependencies = Vec::new();
    for i in 0..width.saturating_sub(2) {
        dependencies.push(FunctionalDependency::new(
            [names[i].as_str()],
            [names[i + 2].as_str()],
        ));
    }
    if width >= 2 {
        dependencies.push(FunctionalDependency::new(
            [names[width - 1].as_str()],
            [names[0].as_str()],
        ));
    }
    Relation::new(names.iter().map(String::as_str).collect::<AttributeSet>(), dependencies)
        .unwrap()
}

/// Adjacent pairs: {a0, a1}, {a1, a2}, ...
fn pairwise_decomposition(relation: &Relation) -> Vec<AttributeSet> {
    let attributes: Vec<_> = relation.universe().iter().collect();
    attributes
        .windows(2)
        .map(|pair| pair.iter().copied().collect())
        .collect()
}

fn bench_minimal_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal_keys");

    for width in [4, 8, 12, 16].iter() {
        let relation = generate_relation(*width);
        group.bench_with_input(BenchmarkId::new("width", width), &relation, |b, relation| {
            b.iter(|| black_box(minimal_keys(relation)))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for width in [4, 8, 12].iter() {
        let relation = generate_relation(*width);
        group.bench_with_input(BenchmarkId::new("width", width), &relation, |b, relation| {
            b.iter(|| black_box(classify(relation)))
        });
    }

    group.finish();
}

fn bench_preservation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_preservation");

    for width in [4, 8, 12].iter() {
        let relation = generate_relation(*width);
        let pieces = pairwise_decomposition(&relation);
        group.bench_with_input(BenchmarkId::new("width", width), &relation, |b, relation| {
            b.iter(|| black_box(is_dependency_preserving(relation, &pieces).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the full report through the facade.
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let armstrong = Armstrong::new();

    for width in [4, 8, 12].iter() {
        let relation = generate_relation(*width);
        group.bench_with_input(BenchmarkId::new("width", width), &relation, |b, relation| {
            b.iter(|| black_box(armstrong.analyze_relation(relation).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_minimal_keys,
    bench_classify,
    bench_preservation,
    bench_full_analysis
);
criterion_main!(benches);
