//! FILENAME: core/parser/benches/parse_throughput.rs
//! PURPOSE: Measures tokenizing and parsing cost as inputs grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expr_parser::{parse, tokenize};

/// Builds a flat chain like "x0 + 1.5 * sin(x1) - x2 ^ 2 ..." with `terms` terms.
fn build_chain(terms: usize) -> String {
    let mut expr = String::from("x0");
    for i in 1..terms {
        let term = match i % 4 {
            0 => format!(" + {}", i),
            1 => format!(" * sin(x{})", i),
            2 => format!(" - x{} ^ 2", i),
            _ => format!(" / log({}, 2)", i),
        };
        expr.push_str(&term);
    }
    expr
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for terms in [10, 100, 1_000] {
        let input = build_chain(terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &input, |b, input| {
            b.iter(|| tokenize(black_box(input)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for terms in [10, 100, 1_000] {
        let input = build_chain(terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
