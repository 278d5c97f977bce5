use std::collections::HashSet;

use crate::core::color::Color;
use crate::core::{ChartKind, Geometry, Series};
use crate::error::{ChartError, ChartResult, ConfigError, DataShapeError};

use super::ChartEngineConfig;

pub(super) fn validate_config(config: &ChartEngineConfig) -> ChartResult<Geometry> {
    for (name, value) in [
        ("margin.top", config.margin.top),
        ("margin.right", config.margin.right),
        ("margin.bottom", config.margin.bottom),
        ("margin.left", config.margin.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_option(name, "must be finite and >= 0"));
        }
    }
    let geometry = Geometry::resolve(config.width, config.height, config.margin)?;

    config.animation().validate()?;
    if !config.stroke_width.is_finite() || config.stroke_width < 0.0 {
        return Err(invalid_option("stroke_width", "must be finite and >= 0"));
    }
    if !config.point_size.is_finite() || config.point_size < 0.0 {
        return Err(invalid_option("point_size", "must be finite and >= 0"));
    }
    if !config.bar_spacing.is_finite() || !(0.0..=1.0).contains(&config.bar_spacing) {
        return Err(invalid_option("bar_spacing", "must be within [0, 1]"));
    }
    if !config.radius_cap.is_finite() || config.radius_cap < 1.0 {
        return Err(invalid_option("radius_cap", "must be finite and >= 1"));
    }
    if !config.pie.label_offset.is_finite() {
        return Err(invalid_option("pie.label_offset", "must be finite"));
    }
    if config.kind.needs_radius() && config.r_scale_type.is_none() {
        return Err(invalid_option(
            "r_scale_type",
            "bubble charts need a radius scale",
        ));
    }

    Color::from_hex(&config.color_scale.from)?;
    Color::from_hex(&config.color_scale.to)?;
    for entry in &config.palette {
        Color::from_hex(entry)?;
    }

    Ok(geometry)
}

/// Checks the caller's series before any pipeline work runs.
pub(super) fn validate_series(series: &[Series], kind: ChartKind) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(series.len());
    for (index, entry) in series.iter().enumerate() {
        if entry.key.is_empty() {
            return Err(ConfigError::MissingSeriesKey { index }.into());
        }
        if !seen.insert(entry.key.as_str()) {
            return Err(ConfigError::DuplicateSeriesKey {
                key: entry.key.clone(),
            }
            .into());
        }

        for (point_index, point) in entry.values.iter().enumerate() {
            for (axis, value) in [("x", &point.x), ("y", &point.y)] {
                if let Some(number) = value.as_number() {
                    if !number.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "series `{}` point {point_index}: `{axis}` must be finite",
                            entry.key
                        )));
                    }
                }
            }
            if kind.needs_radius() {
                match point.r {
                    None => {
                        return Err(DataShapeError::MissingRadius {
                            series: entry.key.clone(),
                            point_index,
                        }
                        .into());
                    }
                    Some(r) if !r.is_finite() => {
                        return Err(ChartError::InvalidData(format!(
                            "series `{}` point {point_index}: `r` must be finite",
                            entry.key
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
    }
    Ok(())
}

fn invalid_option(name: &'static str, reason: &str) -> ChartError {
    ConfigError::InvalidOption {
        name,
        reason: reason.to_owned(),
    }
    .into()
}
