use std::fmt::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::{Node, NodeVisitor, parse};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 4_096;

fn make_blocks(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 96);
    for i in 0..blocks {
        let _ = write!(
            &mut out,
            "<div class=block><span style=\"color:#000000;\">item {i}</span> <img src=x></div>"
        );
    }
    out
}

fn parse_blocks(input: &str) -> Node {
    parse(input)
        .expect("bench fixture must parse")
        .expect("bench fixture must produce a node")
}

fn bench_parse_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_parse_small", |b| {
        b.iter(|| {
            let tree = parse(black_box(&input));
            black_box(tree.is_ok());
        });
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_parse_large", |b| {
        b.iter(|| {
            let tree = parse(black_box(&input));
            black_box(tree.is_ok());
        });
    });
}

fn bench_serialize_large(c: &mut Criterion) {
    let tree = parse_blocks(&make_blocks(LARGE_BLOCKS));
    c.bench_function("bench_serialize_large", |b| {
        b.iter(|| {
            let out = black_box(&tree).to_string();
            black_box(out.len());
        });
    });
}

fn bench_identity_visit_large(c: &mut Criterion) {
    struct Identity;

    impl NodeVisitor for Identity {}

    let tree = parse_blocks(&make_blocks(LARGE_BLOCKS));
    c.bench_function("bench_identity_visit_large", |b| {
        b.iter(|| {
            let visited = Identity.visit(black_box(&tree));
            black_box(visited.ptr_eq(&tree));
        });
    });
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_large,
    bench_serialize_large,
    bench_identity_visit_large
);
criterion_main!(benches);
