use criterion::{Criterion, criterion_group, criterion_main};
use outline_pages_engine::{Document, IndexOptions, MemorySink, PageRenderer, Template};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(20);

    let content = common::generate_outline(10, 4);
    group.bench_function("from_text", |b| {
        b.iter(|| {
            let doc = Document::from_text(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_outline(10, 4);
    let doc = Document::from_text(&content).unwrap();
    let template = Template::builtin();

    group.bench_function("write_all", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            PageRenderer::new(&doc, &template)
                .write_all(&mut sink, &IndexOptions::default())
                .unwrap();
            std::hint::black_box(sink);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
