use approx::assert_abs_diff_eq;
use chart_kit::animation::{
    AREA_OUTLINE_DURATION_FACTOR, AnimationConfig, AnimationEffect, AnimationTimeline, Easing,
    LINE_POINTER_GROW_MS, schedule,
};
use chart_kit::api::{ChartEngine, ChartEngineConfig};
use chart_kit::core::primitives::{PrimitiveKey, PrimitiveRole, Shape};
use chart_kit::core::{ChartKind, DataPoint, Margin, Series};
use chart_kit::render::NullRenderer;

fn series() -> Vec<Series> {
    vec![
        Series::new(
            "A",
            vec![
                DataPoint::new("a", 1.0),
                DataPoint::new("b", 2.0),
                DataPoint::new("c", 3.0),
            ],
        ),
        Series::new(
            "B",
            vec![
                DataPoint::new("a", 2.0),
                DataPoint::new("b", 1.0),
                DataPoint::new("c", 4.0),
            ],
        ),
    ]
}

fn engine(kind: ChartKind) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::for_kind(kind)
        .with_size(200.0, 100.0)
        .with_margin(Margin::zero());
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_data(series()).expect("data");
    engine
}

#[test]
fn bars_stagger_by_point_index_within_each_series() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");

    let delays: Vec<(String, f64)> = pass
        .plans
        .iter()
        .map(|plan| (plan.key.to_string(), plan.delay_ms))
        .collect();
    assert_eq!(
        delays,
        vec![
            ("bar:A:0".to_owned(), 0.0),
            ("bar:A:1".to_owned(), 50.0),
            ("bar:A:2".to_owned(), 100.0),
            ("bar:B:0".to_owned(), 0.0),
            ("bar:B:1".to_owned(), 50.0),
            ("bar:B:2".to_owned(), 100.0),
        ]
    );
}

#[test]
fn bars_grow_from_the_plot_bottom() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");
    let plan = &pass.plans[0];

    match (&plan.effect, &plan.target) {
        (
            AnimationEffect::Grow {
                from: Shape::Rect { y, height, .. },
            },
            Shape::Rect {
                height: target_height,
                ..
            },
        ) => {
            assert_eq!(*y, 100.0);
            assert_eq!(*height, 0.0);
            assert!(*target_height > 0.0);
        }
        other => panic!("unexpected plan {other:?}"),
    }
    assert_eq!(plan.duration_ms, 500.0);
    assert_eq!(plan.easing, Easing::CubicInOut);
}

#[test]
fn negative_bars_grow_down_from_the_zero_line() {
    let config = ChartEngineConfig::for_kind(ChartKind::Bar)
        .with_size(100.0, 150.0)
        .with_margin(Margin::zero());
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine
        .set_data(vec![Series::new(
            "A",
            vec![DataPoint::new("a", -5.0), DataPoint::new("b", 10.0)],
        )])
        .expect("data");
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");

    let starts: Vec<(f64, f64)> = pass
        .plans
        .iter()
        .map(|plan| match &plan.effect {
            AnimationEffect::Grow {
                from: Shape::Rect { y, height, .. },
            } => (*y, *height),
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(starts, vec![(100.0, 0.0), (100.0, 0.0)]);
}

#[test]
fn line_paths_reveal_linearly_and_pointers_grow_quickly() {
    let mut engine = engine(ChartKind::Line);
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");

    let line = pass
        .plans
        .iter()
        .find(|plan| plan.key == PrimitiveKey::series(PrimitiveRole::Line, "A"))
        .expect("line plan");
    let path_length = line.target.path_length();
    assert_eq!(line.effect, AnimationEffect::StrokeReveal { path_length });
    assert_eq!(line.easing, Easing::Linear);
    assert_eq!(line.delay_ms, 0.0);
    assert_abs_diff_eq!(
        line.dash_offset_at(250.0).expect("dash"),
        path_length / 2.0,
        epsilon = 1e-9
    );

    let pointer = pass
        .plans
        .iter()
        .find(|plan| plan.key == PrimitiveKey::point(PrimitiveRole::Point, "A", 2))
        .expect("pointer plan");
    assert_eq!(pointer.duration_ms, LINE_POINTER_GROW_MS);
    assert_eq!(pointer.delay_ms, 300.0);
}

#[test]
fn area_outline_fades_in_over_a_longer_duration() {
    let mut engine = engine(ChartKind::Area);
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");

    let outline_b = pass
        .plans
        .iter()
        .find(|plan| plan.key == PrimitiveKey::series(PrimitiveRole::Line, "B"))
        .expect("outline plan");
    assert_eq!(outline_b.effect, AnimationEffect::FadeIn);
    assert_eq!(outline_b.duration_ms, 500.0 * AREA_OUTLINE_DURATION_FACTOR);
    assert_eq!(outline_b.delay_ms, 50.0);
    assert_eq!(outline_b.opacity_at(0.0), 0.0);

    let fill = pass
        .plans
        .iter()
        .find(|plan| plan.key == PrimitiveKey::series(PrimitiveRole::Area, "A"))
        .expect("area plan");
    match &fill.effect {
        AnimationEffect::Grow {
            from: Shape::Area { vertices, .. },
        } => assert!(vertices.iter().all(|vertex| vertex.y == 100.0)),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn disabled_animation_applies_everything_immediately() {
    let config = ChartEngineConfig::for_kind(ChartKind::Bar)
        .with_size(200.0, 100.0)
        .with_animation(false, 500.0, 50.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_data(series()).expect("data");
    engine.render().expect("render");

    let pass = engine.last_pass().expect("pass");
    assert!(pass.plans.iter().all(|plan| plan.is_immediate()
        && plan.delay_ms == 0.0
        && plan.duration_ms == 0.0));
    assert_eq!(engine.timeline().active_len(), 0);
}

#[test]
fn progress_respects_delay_and_easing() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("render");
    let plan = engine.last_pass().expect("pass").plans[1].clone();

    assert_eq!(plan.progress_at(0.0), 0.0);
    assert_eq!(plan.progress_at(50.0), 0.0);
    assert_abs_diff_eq!(plan.progress_at(300.0), 0.5, epsilon = 1e-12);
    assert_eq!(plan.progress_at(550.0), 1.0);
}

#[test]
fn clock_drives_samples_until_completion() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("render");
    let key = PrimitiveKey::point(PrimitiveRole::Bar, "A", 0);

    let start = engine.sample(&key).expect("animating");
    assert_eq!(start.progress, 0.0);

    assert!(engine.advance_clock(250.0).is_empty());
    let halfway = engine.sample(&key).expect("animating");
    assert_abs_diff_eq!(halfway.progress, 0.5, epsilon = 1e-12);

    let completed = engine.advance_clock(250.0);
    assert!(completed.contains(&key));
    assert!(engine.sample(&key).is_none());

    engine.advance_clock(1_000.0);
    assert_eq!(engine.timeline().active_len(), 0);
}

#[test]
fn exiting_primitives_cancel_their_animation() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("render");
    engine.advance_clock(10.0);

    engine.legend_click(0).expect("toggle A off");
    let pass = engine.last_pass().expect("pass");

    for index in 0..3 {
        let key = PrimitiveKey::point(PrimitiveRole::Bar, "A", index);
        assert!(pass.cancelled.contains(&key));
        assert!(!engine.timeline().is_animating(&key));
    }
    // Updated B bars snap to their new geometry.
    assert!(pass.plans.is_empty());
    assert!(!engine
        .timeline()
        .is_animating(&PrimitiveKey::point(PrimitiveRole::Bar, "B", 0)));
}

#[test]
fn updated_primitives_never_get_plans() {
    let mut engine = engine(ChartKind::Bar);
    engine.render().expect("first");
    engine.render().expect("second");
    let pass = engine.last_pass().expect("pass");
    assert!(pass.plans.is_empty());
    assert_eq!(pass.delta.updated.len(), 6);
}

#[test]
fn pie_arcs_apply_immediately() {
    let mut engine = engine(ChartKind::Pie);
    engine.render().expect("render");
    let pass = engine.last_pass().expect("pass");
    assert_eq!(pass.plans.len(), 2);
    assert!(pass.plans.iter().all(|plan| plan.is_immediate()));
}

#[test]
fn schedule_without_entries_is_empty() {
    let geometry = chart_kit::core::Geometry::resolve(100.0, 100.0, Margin::zero())
        .expect("geometry");
    assert!(schedule(ChartKind::Bar, &[], geometry, AnimationConfig::default()).is_empty());
    assert_eq!(AnimationTimeline::new().now_ms(), 0.0);
}
