use approx::assert_abs_diff_eq;
use chart_kit::core::color::CATEGORY10;
use chart_kit::core::{Color, ColorScale, GradientStops};
use chart_kit::error::{ChartError, ConfigError};

#[test]
fn gradient_hits_endpoints_and_midpoint() {
    let stops = GradientStops::new("#000000", "#ffffff");
    let scale = ColorScale::new(3, true, &stops, None).expect("gradient");

    assert_eq!(scale.color(0).to_hex(), "#000000");
    assert_eq!(scale.color(2).to_hex(), "#ffffff");

    let middle = scale.color(1);
    assert_abs_diff_eq!(middle.red, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(middle.green, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(middle.blue, 0.5, epsilon = 1e-12);
    assert_eq!(middle.to_hex(), "#808080");
}

#[test]
fn single_series_gradient_uses_midpoint() {
    let stops = GradientStops::new("#000000", "#ffffff");
    let scale = ColorScale::new(1, true, &stops, None).expect("gradient");
    assert_eq!(scale.color(0).to_hex(), "#808080");
}

#[test]
fn default_gradient_runs_between_configured_stops() {
    let scale = ColorScale::new(2, true, &GradientStops::default(), None).expect("gradient");
    assert_eq!(scale.color(0).to_hex(), "#008793");
    assert_eq!(scale.color(1).to_hex(), "#00bf72");
}

#[test]
fn palette_wraps_around() {
    let palette = vec!["#ff0000".to_owned(), "#00ff00".to_owned()];
    let scale = ColorScale::new(5, false, &GradientStops::default(), Some(palette.as_slice()))
        .expect("palette");

    assert_eq!(scale.color(0).to_hex(), "#ff0000");
    assert_eq!(scale.color(1).to_hex(), "#00ff00");
    assert_eq!(scale.color(2).to_hex(), "#ff0000");
}

#[test]
fn empty_palette_falls_back_to_category10() {
    let empty: Vec<String> = Vec::new();
    let scale = ColorScale::new(12, false, &GradientStops::default(), Some(empty.as_slice()))
        .expect("palette");

    for (index, expected) in CATEGORY10.iter().enumerate() {
        assert_eq!(scale.color(index).to_hex(), *expected);
    }
    assert_eq!(scale.color(10).to_hex(), CATEGORY10[0]);
}

#[test]
fn invalid_gradient_stop_is_a_config_error() {
    let stops = GradientStops::new("#000000", "not-a-color");
    let err = ColorScale::new(2, true, &stops, None).expect_err("invalid stop");
    assert_eq!(
        err,
        ChartError::Config(ConfigError::InvalidColor("not-a-color".to_owned()))
    );
}

#[test]
fn lerp_clamps_its_parameter() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let white = Color::rgb(1.0, 1.0, 1.0);
    assert_eq!(black.lerp(white, 2.0), white);
    assert_eq!(black.lerp(white, -1.0), black);
}
