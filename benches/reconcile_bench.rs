use chart_kit::api::{ChartEngine, ChartEngineConfig};
use chart_kit::core::{ChartKind, DataPoint, Series, annotate};
use chart_kit::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_series(series_count: usize, points: usize) -> Vec<Series> {
    (0..series_count)
        .map(|s| {
            let values = (0..points)
                .map(|i| {
                    let y = 50.0 + ((i * 7 + s * 13) % 40) as f64;
                    DataPoint::new(format!("c{i}"), y)
                })
                .collect();
            Series::new(format!("series-{s}"), values)
        })
        .collect()
}

fn bench_annotate_20x500(c: &mut Criterion) {
    let series = generated_series(20, 500);

    c.bench_function("annotate_20x500", |b| {
        b.iter(|| {
            let _ = annotate(black_box(&series));
        })
    });
}

fn bench_bar_rerender_10x200(c: &mut Criterion) {
    let config = ChartEngineConfig::for_kind(ChartKind::Bar)
        .with_size(1920.0, 1080.0)
        .with_animation(false, 0.0, 0.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(generated_series(10, 200))
        .expect("valid data");
    engine.render().expect("first render");

    c.bench_function("bar_rerender_10x200", |b| {
        b.iter(|| {
            engine.render().expect("render");
        })
    });
}

fn bench_line_legend_toggle_10x200(c: &mut Criterion) {
    let config = ChartEngineConfig::for_kind(ChartKind::Line).with_size(1920.0, 1080.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(generated_series(10, 200))
        .expect("valid data");
    engine.render().expect("first render");

    c.bench_function("line_legend_toggle_10x200", |b| {
        b.iter(|| {
            engine.legend_click(black_box(3)).expect("toggle");
        })
    });
}

criterion_group!(
    benches,
    bench_annotate_20x500,
    bench_bar_rerender_10x200,
    bench_line_legend_toggle_10x200
);
criterion_main!(benches);
