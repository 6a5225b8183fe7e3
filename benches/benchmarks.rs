//! Benchmarks for the reader core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mini_reader::{
    paginate, resolve, Document, LayoutEvent, MarkdownParser, MetricsEstimator, Reader,
    SidebarState, Viewport,
};

fn sample_book(chapters: usize) -> String {
    let mut text = String::new();
    for c in 0..chapters {
        text.push_str(&format!("# Chapter {}\n\n", c + 1));
        for p in 0..30 {
            text.push_str(&format!(
                "*{}* Paragraph {} contains enough text to span multiple lines and exercise the line breaker on every pass. ",
                p + 1,
                p
            ));
            text.push_str("It goes on for a while longer so that pages fill up.\n\n");
        }
        text.push_str("-------\n\n");
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_book(20);
    c.bench_function("parse_book", |b| {
        b.iter(|| Document::from_text("Bench", black_box(&text), &MarkdownParser));
    });
}

fn bench_paginate_desktop(c: &mut Criterion) {
    let doc = Document::from_text("Bench", &sample_book(20), &MarkdownParser);
    let estimator = MetricsEstimator::default();
    let geometry = resolve(Viewport::new(1440.0, 900.0), SidebarState::Collapsed);

    c.bench_function("paginate_desktop", |b| {
        b.iter(|| paginate(black_box(doc.units()), &geometry, false, &estimator));
    });
}

fn bench_paginate_mobile_justified(c: &mut Criterion) {
    let doc = Document::from_text("Bench", &sample_book(20), &MarkdownParser);
    let estimator = MetricsEstimator::default();
    let geometry = resolve(Viewport::new(390.0, 844.0), SidebarState::Collapsed);

    c.bench_function("paginate_mobile_justified", |b| {
        b.iter(|| paginate(black_box(doc.units()), &geometry, true, &estimator));
    });
}

fn bench_resize_relayout(c: &mut Criterion) {
    c.bench_function("resize_relayout", |b| {
        let mut reader = Reader::new(MetricsEstimator::default(), Viewport::new(1440.0, 900.0));
        let doc = Document::from_text("Bench", &sample_book(5), &MarkdownParser);
        let _ = reader.load(doc, Some(10));
        let mut wide = false;

        b.iter(|| {
            wide = !wide;
            let width = if wide { 1440.0 } else { 700.0 };
            let _ = reader.handle(LayoutEvent::ViewportResized(Viewport::new(width, 900.0)));
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_paginate_desktop,
    bench_paginate_mobile_justified,
    bench_resize_relayout,
);

criterion_main!(benches);
