use std::f64::consts::{FRAC_PI_4, PI, TAU};

use approx::assert_abs_diff_eq;
use chart_kit::api::{ChartEngine, ChartEngineConfig};
use chart_kit::core::primitives::{PathVertex, PrimitiveKey, PrimitiveRole, Shape, ShapeDatum};
use chart_kit::core::{
    ChartKind, DataPoint, Margin, PieOptions, ScaleKind, Series, TextAnchor,
};
use chart_kit::error::{ChartError, DataShapeError};
use chart_kit::render::NullRenderer;

fn render(kind: ChartKind, config: ChartEngineConfig, series: Vec<Series>) -> ChartEngine<NullRenderer> {
    assert_eq!(config.kind, kind);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_data(series).expect("data");
    engine.render().expect("render");
    engine
}

fn square(kind: ChartKind) -> ChartEngineConfig {
    ChartEngineConfig::for_kind(kind)
        .with_size(100.0, 100.0)
        .with_margin(Margin::zero())
}

fn keys(engine: &ChartEngine<NullRenderer>) -> Vec<String> {
    engine.primitives().keys().map(ToString::to_string).collect()
}

fn categorical() -> Vec<Series> {
    vec![
        Series::new("A", vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)]),
        Series::new("B", vec![DataPoint::new("a", 2.0), DataPoint::new("b", 0.0)]),
    ]
}

fn numeric() -> Vec<Series> {
    vec![Series::new(
        "A",
        vec![
            DataPoint::new(1.0, 2.0).with_radius(1.0),
            DataPoint::new(3.0, 4.0).with_radius(4.0),
        ],
    )]
}

#[test]
fn line_chart_draws_paths_and_pointers() {
    let engine = render(ChartKind::Line, square(ChartKind::Line), categorical());

    assert_eq!(
        keys(&engine),
        vec![
            "line:A",
            "point:A:0",
            "point:A:1",
            "line:B",
            "point:B:0",
            "point:B:1"
        ]
    );
    let line = engine
        .primitives()
        .get(&PrimitiveKey::series(PrimitiveRole::Line, "A"))
        .expect("line");
    assert_eq!(
        line.shape,
        Shape::Path {
            vertices: vec![PathVertex::new(0.0, 67.0), PathVertex::new(100.0, 0.0)],
        }
    );
    assert!(line.style.fill.is_none());
    assert_eq!(line.style.stroke_width, 1.5);
    assert!(matches!(line.datum, ShapeDatum::Series(ref series) if series.key == "A"));

    let pointer = engine
        .primitives()
        .get(&PrimitiveKey::point(PrimitiveRole::Point, "B", 1))
        .expect("pointer");
    assert_eq!(
        pointer.shape,
        Shape::Circle {
            cx: 100.0,
            cy: 100.0,
            r: 2.0
        }
    );
}

#[test]
fn builders_only_emit_their_declared_roles() {
    let cases = [
        (ChartKind::Line, categorical()),
        (ChartKind::Area, categorical()),
        (ChartKind::Bar, categorical()),
        (ChartKind::Scatter, numeric()),
        (ChartKind::Bubble, numeric()),
        (ChartKind::Pie, categorical()),
    ];
    for (kind, series) in cases {
        let engine = render(kind, square(kind), series);
        let roles = kind.shape_builder().roles();
        assert!(!engine.primitives().is_empty());
        for key in engine.primitives().keys() {
            assert!(roles.contains(&key.role()), "{kind:?} emitted {key}");
        }
    }
}

#[test]
fn line_pointers_can_be_switched_off() {
    let config = square(ChartKind::Line).with_scatter_pointers(false);
    let engine = render(ChartKind::Line, config, categorical());
    assert_eq!(keys(&engine), vec!["line:A", "line:B"]);
}

#[test]
fn area_chart_fills_down_to_the_plot_bottom() {
    let engine = render(ChartKind::Area, square(ChartKind::Area), categorical());

    assert_eq!(keys(&engine), vec!["line:A", "area:A", "line:B", "area:B"]);
    let area = engine
        .primitives()
        .get(&PrimitiveKey::series(PrimitiveRole::Area, "B"))
        .expect("area");
    assert_eq!(
        area.shape,
        Shape::Area {
            vertices: vec![PathVertex::new(0.0, 33.0), PathVertex::new(100.0, 100.0)],
            baseline_y: 100.0,
        }
    );
    assert!(area.style.fill.is_some());
}

#[test]
fn scatter_chart_places_fixed_size_points() {
    let engine = render(ChartKind::Scatter, square(ChartKind::Scatter), numeric());

    assert_eq!(keys(&engine), vec!["point:A:0", "point:A:1"]);
    let first = &engine.primitives()[0];
    assert_eq!(
        first.shape,
        Shape::Circle {
            cx: 0.0,
            cy: 50.0,
            r: 3.5
        }
    );
    let last = &engine.primitives()[1];
    assert_eq!(
        last.shape,
        Shape::Circle {
            cx: 100.0,
            cy: 0.0,
            r: 3.5
        }
    );
}

#[test]
fn scatter_rejects_categorical_x_on_a_linear_scale() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), square(ChartKind::Scatter)).expect("engine");
    engine.set_data(categorical()).expect("data");

    let err = engine.render().expect_err("categorical x");
    assert_eq!(
        err,
        ChartError::DataShape(DataShapeError::NonNumericValue {
            series: "A".to_owned(),
            point_index: 0,
            axis: "x",
        })
    );
    assert!(engine.primitives().is_empty());
    assert_eq!(engine.renderer().pass_count, 0);
}

#[test]
fn bubble_radius_follows_a_sqrt_scale() {
    let engine = render(ChartKind::Bubble, square(ChartKind::Bubble), numeric());

    assert_eq!(keys(&engine), vec!["bubble:A:0", "bubble:A:1"]);
    let radii: Vec<f64> = engine
        .primitives()
        .values()
        .map(|primitive| match primitive.shape {
            Shape::Circle { r, .. } => r,
            ref other => panic!("expected circle, got {other:?}"),
        })
        .collect();
    assert_abs_diff_eq!(radii[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(radii[1], 20.0, epsilon = 1e-12);
}

#[test]
fn bubble_radius_cap_is_configurable() {
    let config = square(ChartKind::Bubble).with_radius_scale(Some(ScaleKind::Linear), 10.0);
    let engine = render(ChartKind::Bubble, config, numeric());
    match engine.primitives()[1].shape {
        Shape::Circle { r, .. } => assert_abs_diff_eq!(r, 10.0, epsilon = 1e-12),
        ref other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn bubble_points_need_a_radius() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), square(ChartKind::Bubble)).expect("engine");
    let err = engine
        .set_data(vec![Series::new("A", vec![DataPoint::new(1.0, 2.0)])])
        .expect_err("missing radius");
    assert_eq!(
        err,
        ChartError::DataShape(DataShapeError::MissingRadius {
            series: "A".to_owned(),
            point_index: 0,
        })
    );
}

#[test]
fn bubble_charts_need_a_radius_scale() {
    let config = square(ChartKind::Bubble).with_radius_scale(None, 20.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());
}

fn pie_series() -> Vec<Series> {
    vec![
        Series::new("A", vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]),
        Series::new("B", vec![DataPoint::new("a", 1.0)]),
    ]
}

fn arc_of(engine: &ChartEngine<NullRenderer>, index: usize) -> chart_kit::core::primitives::ArcGeometry {
    match &engine.primitives()[index].shape {
        Shape::Arc(arc) => arc.clone(),
        other => panic!("expected arc, got {other:?}"),
    }
}

#[test]
fn pie_slices_run_clockwise_in_series_order() {
    let engine = render(ChartKind::Pie, square(ChartKind::Pie), pie_series());

    assert_eq!(keys(&engine), vec!["arc:0", "arc:1"]);
    let first = arc_of(&engine, 0);
    let second = arc_of(&engine, 1);
    assert_eq!(first.center, PathVertex::new(50.0, 50.0));
    assert_eq!(first.start_angle, 0.0);
    assert_abs_diff_eq!(first.end_angle, 1.5 * PI, epsilon = 1e-12);
    assert_abs_diff_eq!(second.start_angle, 1.5 * PI, epsilon = 1e-12);
    assert_abs_diff_eq!(second.end_angle, TAU, epsilon = 1e-12);
    assert_eq!(first.outer_radius, 40.0);
    assert_eq!(first.inner_radius, 0.0);

    match &engine.primitives()[0].datum {
        ShapeDatum::Slice(slice) => {
            assert_eq!(slice.label, "A");
            assert_eq!(slice.value, 3.0);
        }
        other => panic!("unexpected datum {other:?}"),
    }
}

#[test]
fn pie_labels_sit_outside_and_anchor_away_from_center() {
    let engine = render(ChartKind::Pie, square(ChartKind::Pie), pie_series());

    let first = arc_of(&engine, 0);
    assert_abs_diff_eq!(first.centroid.x, 20.0 * FRAC_PI_4.cos(), epsilon = 1e-9);
    assert_abs_diff_eq!(first.centroid.y, 20.0 * FRAC_PI_4.sin(), epsilon = 1e-9);

    let label = first.label.expect("label");
    assert_eq!(label.text, "A: 3.00");
    assert_eq!(label.anchor, TextAnchor::Start);
    assert_abs_diff_eq!(label.x, 90.0 * FRAC_PI_4.cos() + 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(label.y, 90.0 * FRAC_PI_4.sin(), epsilon = 1e-9);

    let second = arc_of(&engine, 1).label.expect("label");
    assert_eq!(second.text, "B: 1.00");
    assert_eq!(second.anchor, TextAnchor::End);
    assert!(second.x < 0.0);
}

#[test]
fn doughnut_and_hidden_labels() {
    let config = ChartEngineConfig::for_kind(ChartKind::Pie)
        .with_size(300.0, 300.0)
        .with_margin(Margin::zero())
        .with_pie(PieOptions {
            display_as_doughnut: true,
            display_labels: false,
            ..PieOptions::default()
        });
    let engine = render(ChartKind::Pie, config, pie_series());

    let arc = arc_of(&engine, 0);
    assert_eq!(arc.outer_radius, 140.0);
    assert_eq!(arc.inner_radius, 100.0);
    assert!(arc.label.is_none());
}

#[test]
fn pie_rekeys_by_enabled_position_after_toggle() {
    let mut engine = render(ChartKind::Pie, square(ChartKind::Pie), pie_series());
    engine.legend_click(0).expect("toggle A off");

    let pass = engine.last_pass().expect("pass");
    assert_eq!(pass.delta.exited, vec![PrimitiveKey::arc(1)]);
    let only = arc_of(&engine, 0);
    assert_eq!(only.start_angle, 0.0);
    assert_abs_diff_eq!(only.end_angle, TAU, epsilon = 1e-12);
    assert!(pass.axis_labels.is_empty());
}

#[test]
fn all_zero_pie_yields_empty_slices() {
    let series = vec![
        Series::new("A", vec![DataPoint::new("a", 0.0)]),
        Series::new("B", vec![DataPoint::new("a", 0.0)]),
    ];
    let engine = render(ChartKind::Pie, square(ChartKind::Pie), series);
    for index in 0..2 {
        let arc = arc_of(&engine, index);
        assert_eq!(arc.start_angle, arc.end_angle);
    }
}

#[test]
fn negative_pie_totals_are_rejected() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), square(ChartKind::Pie)).expect("engine");
    engine
        .set_data(vec![Series::new("A", vec![DataPoint::new("a", -1.0)])])
        .expect("data");
    assert!(matches!(
        engine.render().expect_err("negative"),
        ChartError::InvalidData(_)
    ));
}
