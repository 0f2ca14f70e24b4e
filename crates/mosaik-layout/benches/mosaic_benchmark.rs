//! Mosaic parsing and layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mosaik_core::DeckConfig;
use mosaik_layout::{compute_layout, parse_mosaic, Slide};

const SIMPLE_MOSAIC: &str = "ab\nac";

const DENSE_MOSAIC: &str = r#"
    aaabbbcccddd
    aaabbbcccddd
    eeeffffgghhh
    eeeffffgghhh
    iiijjjkkklll
    mmmnnnooopqr
"#;

fn parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| parse_mosaic(black_box(SIMPLE_MOSAIC)))
    });
}

fn parse_dense(c: &mut Criterion) {
    c.bench_function("parse_dense", |b| {
        b.iter(|| parse_mosaic(black_box(DENSE_MOSAIC)))
    });
}

fn layout_dense(c: &mut Criterion) {
    let config = DeckConfig::default();
    let slide = Slide::with_title(DENSE_MOSAIC, "Benchmark").expect("dense mosaic parses");
    c.bench_function("layout_dense", |b| {
        b.iter(|| {
            compute_layout(black_box(&slide), 10.0, 7.5, &config).map(|l| l.placements.len())
        })
    });
}

criterion_group!(benches, parse_simple, parse_dense, layout_dense);
criterion_main!(benches);
