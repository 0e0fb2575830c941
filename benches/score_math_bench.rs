use criterion::{criterion_group, criterion_main, Criterion};
use starscore::render::html::HtmlRenderer;
use starscore::{
    fills_for_score, position_to_score, project, DisplayConfig, ReviewScore, StarRenderer,
};
use std::hint::black_box;

fn bench_fills(c: &mut Criterion) {
    c.bench_function("fills_for_score_all", |b| {
        b.iter(|| {
            for v in 0..=400u16 {
                black_box(fills_for_score(Some(ReviewScore::from_clamped(i64::from(v)))));
            }
        })
    });
}

fn bench_position(c: &mut Criterion) {
    c.bench_function("position_to_score_sweep", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(position_to_score(f64::from(i) / 1000.0));
            }
        })
    });
}

fn bench_html_row(c: &mut Criterion) {
    let renderer = HtmlRenderer::new(DisplayConfig::default());
    let projections: Vec<_> = (0..64).map(|seed| project(ReviewScore::sample(seed))).collect();
    c.bench_function("html_row", |b| {
        b.iter(|| {
            for projection in &projections {
                black_box(renderer.row(projection));
            }
        })
    });
}

criterion_group!(benches, bench_fills, bench_position, bench_html_row);
criterion_main!(benches);
