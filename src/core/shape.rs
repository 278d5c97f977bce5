use serde::{Deserialize, Serialize};

use crate::core::color::{Color, ColorScale};
use crate::core::geometry::{AxisScales, Geometry};
use crate::core::primitives::{Primitive, PrimitiveRole};
use crate::core::scale::{Axis, Scale};
use crate::core::{AnnotatedPoint, AnnotatedSeries};
use crate::error::{ChartError, ChartResult, ConfigError};

/// Chart families supported by the shape builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    Scatter,
    Bubble,
    Pie,
}

impl ChartKind {
    /// Event prefix used for `{shape}Click`, `{shape}MouseOver`, `{shape}MouseOut`.
    #[must_use]
    pub const fn event_prefix(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Scatter => "point",
            Self::Bubble => "bubble",
            Self::Pie => "pie",
        }
    }

    #[must_use]
    pub const fn uses_axes(self) -> bool {
        !matches!(self, Self::Pie)
    }

    #[must_use]
    pub const fn needs_radius(self) -> bool {
        matches!(self, Self::Bubble)
    }

    #[must_use]
    pub fn shape_builder(self) -> &'static dyn ShapeBuilder {
        match self {
            Self::Line => &crate::core::line_series::LineShapes,
            Self::Area => &crate::core::area_series::AreaShapes,
            Self::Bar => &crate::core::bar_series::BarShapes,
            Self::Scatter => &crate::core::scatter_series::ScatterShapes,
            Self::Bubble => &crate::core::bubble_series::BubbleShapes,
            Self::Pie => &crate::core::pie_series::PieShapes,
        }
    }
}

/// Which index selects a series' color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorAssignment {
    /// Full-list position; colors stay put when other series toggle and match
    /// the legend swatches.
    #[default]
    SeriesIndex,
    /// Position within the enabled subset.
    EnabledRank,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieOptions {
    pub display_as_doughnut: bool,
    pub display_labels: bool,
    pub label_offset: f64,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            display_as_doughnut: false,
            display_labels: true,
            label_offset: 90.0,
        }
    }
}

/// Styling knobs shared by the builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    pub stroke_width: f64,
    pub point_size: f64,
    pub draw_scatter_pointers: bool,
    pub pie: PieOptions,
}

/// Everything a builder may read while producing primitives for one pass.
pub struct ShapeContext<'a> {
    pub geometry: Geometry,
    pub scales: Option<&'a AxisScales>,
    pub colors: &'a ColorScale,
    pub color_assignment: ColorAssignment,
    pub options: ShapeOptions,
}

impl ShapeContext<'_> {
    pub fn scales(&self) -> ChartResult<&AxisScales> {
        self.scales.ok_or_else(|| {
            ChartError::InvalidData("axis scales are required for this chart kind".to_owned())
        })
    }

    #[must_use]
    pub fn series_color(&self, series_index: usize, enabled_rank: Option<usize>) -> Color {
        match self.color_assignment {
            ColorAssignment::SeriesIndex => self.colors.color(series_index),
            ColorAssignment::EnabledRank => {
                self.colors.color(enabled_rank.unwrap_or(series_index))
            }
        }
    }

    pub fn radius_scale(&self) -> ChartResult<&Scale> {
        self.scales()?.r.as_ref().ok_or_else(|| {
            ConfigError::InvalidOption {
                name: "r_scale_type",
                reason: "a radius scale is required for this chart kind".to_owned(),
            }
            .into()
        })
    }
}

/// Per-chart geometry producer.
///
/// Builders receive only enabled series and must emit keys that are unique
/// within the pass and derived from series keys and point indices.
pub trait ShapeBuilder {
    fn roles(&self) -> &'static [PrimitiveRole];

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>>;
}

/// Maps one point's field through `scale`, naming the point on failure.
pub(crate) fn map_point(scale: &Scale, point: &AnnotatedPoint, axis: Axis) -> ChartResult<f64> {
    let value = match axis {
        Axis::X => Some(&point.x),
        Axis::Y => Some(&point.y),
        Axis::R => None,
    };
    let mapped = match value {
        Some(value) => scale.map(value),
        None => point
            .r
            .and_then(|r| scale.map(&crate::core::Value::Number(r))),
    };
    mapped.ok_or_else(|| {
        ChartError::InvalidData(format!(
            "series `{}` point {}: `{}` value is outside the scale domain",
            point.series_key,
            point.point_index,
            axis.name()
        ))
    })
}
