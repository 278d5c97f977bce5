use serde::{Deserialize, Serialize};

use crate::core::scale::{Axis, Scale, ScaleKind, ScaleOptions, create_scale, flatten_points};
use crate::core::{AnnotatedSeries, Margin};
use crate::error::{ChartError, ChartResult};

/// Usable plot rectangle derived from the requested chart bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub plot_width: f64,
    pub plot_height: f64,
    pub margin: Margin,
}

impl Geometry {
    /// Subtracts margins from `width`/`height`; the remaining plot must be non-empty.
    pub fn resolve(width: f64, height: f64, margin: Margin) -> ChartResult<Self> {
        let plot_width = width - margin.left - margin.right;
        let plot_height = height - margin.top - margin.bottom;
        if !plot_width.is_finite()
            || !plot_height.is_finite()
            || plot_width <= 0.0
            || plot_height <= 0.0
        {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(Self {
            plot_width,
            plot_height,
            margin,
        })
    }

    #[must_use]
    pub fn outer_width(self) -> f64 {
        self.plot_width + self.margin.left + self.margin.right
    }

    #[must_use]
    pub fn outer_height(self) -> f64 {
        self.plot_height + self.margin.top + self.margin.bottom
    }
}

/// Scale kinds and knobs requested for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSettings {
    pub x: ScaleKind,
    pub y: ScaleKind,
    pub r: Option<ScaleKind>,
    pub band_padding: f64,
    pub radius_cap: f64,
}

/// Axis scales resolved against a plot rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScales {
    pub x: Scale,
    pub y: Scale,
    pub r: Option<Scale>,
}

/// Derives the x/y (and optional radius) scales from the enabled series.
pub fn resolve_axis_scales(
    geometry: Geometry,
    enabled: &[&AnnotatedSeries],
    settings: ScaleSettings,
) -> ChartResult<AxisScales> {
    let points = flatten_points(enabled.iter().copied());
    let options = ScaleOptions {
        band_padding: settings.band_padding,
        radius_cap: Some(settings.radius_cap),
    };

    let x = create_scale(
        settings.x,
        &points,
        Axis::X,
        0.0,
        geometry.plot_width,
        options,
    )?;
    let y = create_scale(
        settings.y,
        &points,
        Axis::Y,
        0.0,
        geometry.plot_height,
        options,
    )?;
    let r = settings
        .r
        .map(|kind| create_scale(kind, &points, Axis::R, 0.0, settings.radius_cap, options))
        .transpose()?;

    Ok(AxisScales { x, y, r })
}
