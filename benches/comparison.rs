//! Comparison benchmark: markdown2html vs pulldown-cmark
//!
//! Run with: cargo bench --bench comparison
//!
//! Only the shared subset is used (headings, flat lists, paragraphs,
//! strong emphasis), so both parsers do comparable work.

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

fn document(sections: usize) -> String {
    let section = concat!(
        "# Heading\n\n",
        "Some **bold** text and a line\nthat continues here.\n\n",
        "- one\n- two\n- three\n\n",
        "1. first\n2. second\n\n",
    );
    section.repeat(sections)
}

fn pulldown_to_html(input: &str) -> String {
    let parser = pulldown_cmark::Parser::new(input);
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    pulldown_cmark::html::push_html(&mut out, parser);
    out
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    for sections in [1usize, 10, 100, 1000] {
        let input = document(sections);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("markdown2html", sections), &input, |b, input| {
            b.iter(|| markdown2html::to_html(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("pulldown-cmark", sections), &input, |b, input| {
            b.iter(|| pulldown_to_html(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_comparison);
criterion_main!(benches);
