use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::axis_label::TextAnchor;
use crate::core::color::Color;
use crate::core::{AnnotatedPoint, AnnotatedSeries};
use crate::error::{ChartError, ChartResult};

/// Drawable role; also the prefix of every primitive key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveRole {
    Line,
    Area,
    Bar,
    Point,
    Bubble,
    Arc,
}

impl PrimitiveRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Point => "point",
            Self::Bubble => "bubble",
            Self::Arc => "arc",
        }
    }
}

/// Stable identity of a primitive across renders.
///
/// Built from the series key and point index, never from array position, so
/// toggling series does not reshuffle identities. Displays as
/// `role:series` or `role:series:index` (`arc:index` for pie slices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrimitiveKey {
    role: PrimitiveRole,
    series_key: Option<String>,
    index: Option<usize>,
}

impl PrimitiveKey {
    #[must_use]
    pub fn series(role: PrimitiveRole, series_key: impl Into<String>) -> Self {
        Self {
            role,
            series_key: Some(series_key.into()),
            index: None,
        }
    }

    #[must_use]
    pub fn point(role: PrimitiveRole, series_key: impl Into<String>, index: usize) -> Self {
        Self {
            role,
            series_key: Some(series_key.into()),
            index: Some(index),
        }
    }

    #[must_use]
    pub fn arc(index: usize) -> Self {
        Self {
            role: PrimitiveRole::Arc,
            series_key: None,
            index: Some(index),
        }
    }

    #[must_use]
    pub fn role(&self) -> PrimitiveRole {
        self.role
    }

    #[must_use]
    pub fn series_key(&self) -> Option<&str> {
        self.series_key.as_deref()
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl fmt::Display for PrimitiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role.as_str())?;
        if let Some(series_key) = &self.series_key {
            write!(f, ":{series_key}")?;
        }
        if let Some(index) = self.index {
            write!(f, ":{index}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pie label anchored outside the slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

/// Annular sector relative to the pie center. Angles are radians clockwise
/// from twelve o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: PathVertex,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub centroid: PathVertex,
    pub label: Option<ArcLabel>,
}

/// Pixel-space geometry of one primitive, relative to the plot origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// Open polyline.
    Path { vertices: Vec<PathVertex> },
    /// Polyline filled down to `baseline_y`.
    Area {
        vertices: Vec<PathVertex>,
        baseline_y: f64,
    },
    Arc(ArcGeometry),
}

impl Shape {
    /// Total polyline length; zero for shapes without a stroke path.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        match self {
            Self::Path { vertices } | Self::Area { vertices, .. } => vertices
                .windows(2)
                .map(|pair| (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y))
                .sum(),
            Self::Rect { .. } | Self::Circle { .. } | Self::Arc(_) => 0.0,
        }
    }

    /// Interpolates towards `target`. Mismatched shapes snap to `target`.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        let mix_vertices = |from: &[PathVertex], to: &[PathVertex]| -> Vec<PathVertex> {
            from.iter()
                .zip(to)
                .map(|(a, b)| PathVertex::new(mix(a.x, b.x), mix(a.y, b.y)))
                .collect()
        };

        match (self, target) {
            (
                Self::Rect {
                    x,
                    y,
                    width,
                    height,
                },
                Self::Rect {
                    x: tx,
                    y: ty,
                    width: tw,
                    height: th,
                },
            ) => Self::Rect {
                x: mix(*x, *tx),
                y: mix(*y, *ty),
                width: mix(*width, *tw),
                height: mix(*height, *th),
            },
            (Self::Circle { cx, cy, r }, Self::Circle { cx: tx, cy: ty, r: tr }) => Self::Circle {
                cx: mix(*cx, *tx),
                cy: mix(*cy, *ty),
                r: mix(*r, *tr),
            },
            (Self::Path { vertices }, Self::Path { vertices: target_vertices })
                if vertices.len() == target_vertices.len() =>
            {
                Self::Path {
                    vertices: mix_vertices(vertices, target_vertices),
                }
            }
            (
                Self::Area {
                    vertices,
                    baseline_y,
                },
                Self::Area {
                    vertices: target_vertices,
                    baseline_y: target_baseline,
                },
            ) if vertices.len() == target_vertices.len() => Self::Area {
                vertices: mix_vertices(vertices, target_vertices),
                baseline_y: mix(*baseline_y, *target_baseline),
            },
            _ => target.clone(),
        }
    }

    fn coordinates(&self) -> Vec<f64> {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => vec![*x, *y, *width, *height],
            Self::Circle { cx, cy, r } => vec![*cx, *cy, *r],
            Self::Path { vertices } => vertices.iter().flat_map(|v| [v.x, v.y]).collect(),
            Self::Area {
                vertices,
                baseline_y,
            } => vertices
                .iter()
                .flat_map(|v| [v.x, v.y])
                .chain(std::iter::once(*baseline_y))
                .collect(),
            Self::Arc(arc) => vec![
                arc.center.x,
                arc.center.y,
                arc.start_angle,
                arc.end_angle,
                arc.inner_radius,
                arc.outer_radius,
            ],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.coordinates().iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "shape coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl PrimitiveStyle {
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn stroked(color: Color, stroke_width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width,
            opacity: 1.0,
        }
    }
}

/// Pie slice computed from the enabled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Position among the enabled slices.
    pub index: usize,
    pub series_index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Data a primitive was built from; carried as event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDatum {
    Point(AnnotatedPoint),
    Series(AnnotatedSeries),
    Slice(PieSlice),
}

/// One drawable unit with its identity, geometry, and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub key: PrimitiveKey,
    pub shape: Shape,
    pub style: PrimitiveStyle,
    pub datum: ShapeDatum,
}

impl Primitive {
    #[must_use]
    pub fn new(key: PrimitiveKey, shape: Shape, style: PrimitiveStyle, datum: ShapeDatum) -> Self {
        Self {
            key,
            shape,
            style,
            datum,
        }
    }

    #[must_use]
    pub fn role(&self) -> PrimitiveRole {
        self.key.role()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.shape.validate()?;
        if !self.style.stroke_width.is_finite() || self.style.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "primitive `{}` stroke width must be finite and >= 0",
                self.key
            )));
        }
        if let Some(fill) = self.style.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.style.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}
