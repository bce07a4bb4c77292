//! Performance benchmarks for linkscope.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Scope pattern compilation vs. cached lookup
//! - Full link preparation over batches of varying size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linkscope::lru::PatternCache;
use linkscope::{filter_links_by_domain, prepare_links, DomainScope, Options};

fn sample_links(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 5 {
            0 => format!("https://example.com/articles/{i}#comments"),
            1 => format!("https://www.example.com/tag/{i}?page=2"),
            2 => format!("https://blog.example.com/post-{i}.html"),
            3 => format!("https://cdn.example.com/img/{i}.jpg"),
            _ => format!("https://partner{i}.org/ref"),
        })
        .collect()
}

fn bench_scope_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope");

    group.bench_function("compile_uncached", |b| {
        b.iter(|| DomainScope::new(black_box("blog.example.com"), black_box(true)));
    });

    let cache = PatternCache::new(16);
    group.bench_function("cached_lookup", |b| {
        b.iter(|| DomainScope::cached(black_box("blog.example.com"), black_box(true), &cache));
    });

    group.finish();
}

fn bench_filter_links_by_domain(c: &mut Criterion) {
    let links = sample_links(1_000);

    c.bench_function("filter_links_by_domain_1000", |b| {
        b.iter(|| filter_links_by_domain(black_box("example.com"), black_box(&links), false));
    });
}

fn bench_prepare_links(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("prepare_links");

    for size in [100, 1_000, 10_000] {
        let links = sample_links(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &links, |b, links| {
            b.iter(|| prepare_links(black_box("example.com"), black_box(links), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scope_compilation,
    bench_filter_links_by_domain,
    bench_prepare_links
);
criterion_main!(benches);
