use criterion::{Criterion, criterion_group, criterion_main};
use xml_prompt_engine::parsing::{ParseOptions, parse_markdown, tokenize, walk};
mod common;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let options = ParseOptions::default();

    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens = tokenize(std::hint::black_box(&content), &options);
            std::hint::black_box(tokens);
        });
    });

    let tokens = tokenize(&content, &options);
    group.bench_function("walk", |b| {
        b.iter(|| {
            let forest = walk(std::hint::black_box(&tokens));
            std::hint::black_box(forest);
        });
    });

    let nested = common::generate_nested_list(40);
    group.bench_function("parse_nested_list", |b| {
        b.iter(|| {
            let forest = parse_markdown(std::hint::black_box(&nested));
            std::hint::black_box(forest);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
