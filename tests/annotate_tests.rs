use chart_kit::core::{DataPoint, Series, annotate, enabled_series, toggle};

fn three_series() -> Vec<Series> {
    vec![
        Series::new("A", vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]),
        Series::new("B", vec![DataPoint::new("a", 3.0)]),
        Series::new("C", vec![DataPoint::new("a", 4.0), DataPoint::new("b", 5.0)]),
    ]
}

#[test]
fn series_and_point_indices_follow_input_order() {
    let annotated = annotate(&three_series());

    for (position, series) in annotated.iter().enumerate() {
        assert_eq!(series.series_index, position);
        assert_eq!(series.enabled_rank, Some(position));
        for (point_index, point) in series.values.iter().enumerate() {
            assert_eq!(point.point_index, point_index);
            assert_eq!(point.series_index, position);
            assert_eq!(point.series_key, series.key);
        }
    }
}

#[test]
fn enabled_rank_skips_disabled_series() {
    let mut series = three_series();
    series[0].disabled = true;

    let annotated = annotate(&series);
    assert_eq!(annotated[0].enabled_rank, None);
    assert_eq!(annotated[1].enabled_rank, Some(0));
    assert_eq!(annotated[2].enabled_rank, Some(1));

    let enabled: Vec<&str> = enabled_series(&annotated)
        .iter()
        .map(|series| series.key.as_str())
        .collect();
    assert_eq!(enabled, vec!["B", "C"]);
}

#[test]
fn annotate_leaves_input_untouched() {
    let series = three_series();
    let before = series.clone();
    let _ = annotate(&series);
    assert_eq!(series, before);
}

#[test]
fn toggle_off_then_on_restores_ranks_exactly() {
    let series = three_series();
    let original = annotate(&series);

    let off = toggle(&series, 1).expect("toggle off");
    let annotated_off = annotate(&off);
    assert_eq!(annotated_off[2].enabled_rank, Some(1));

    let on = toggle(&off, 1).expect("toggle on");
    assert_eq!(on, series);
    assert_eq!(annotate(&on), original);
}

#[test]
fn series_list_loads_from_json() {
    let series = chart_kit::core::series_from_json_str(
        r#"[
            {"key": "A", "values": [{"x": "a", "y": 1}, {"x": 2, "y": 3, "r": 4}]},
            {"key": "B", "values": [], "disabled": true}
        ]"#,
    )
    .expect("valid json");

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].values[0].x, "a".into());
    assert_eq!(series[0].values[1].x, 2.0.into());
    assert_eq!(series[0].values[1].r, Some(4.0));
    assert!(series[1].disabled);
}
