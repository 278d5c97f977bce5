use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::primitives::{
    PathVertex, Primitive, PrimitiveKey, PrimitiveRole, Shape, ShapeDatum,
};
use crate::core::{ChartKind, Geometry};
use crate::error::{ChartError, ChartResult};

/// Fixed grow duration for the markers drawn on top of line paths.
pub const LINE_POINTER_GROW_MS: f64 = 50.0;
/// Area outlines fade in over this multiple of the configured duration.
pub const AREA_OUTLINE_DURATION_FACTOR: f64 = 2.5;

/// Entrance timing shared by every primitive of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub animate: bool,
    pub duration_ms: f64,
    pub delay_per_index_ms: f64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animate: true,
            duration_ms: 500.0,
            delay_per_index_ms: 50.0,
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("duration", self.duration_ms),
            ("delay", self.delay_per_index_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "animation {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// How an entering primitive reaches its target geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationEffect {
    /// Interpolates from `from` to the target shape.
    Grow { from: Shape },
    /// Dash offset runs from the full path length down to zero.
    StrokeReveal { path_length: f64 },
    /// Opacity runs from 0 to 1.
    FadeIn,
    /// Target applied at once.
    Immediate,
}

/// Entrance transition for one primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    pub key: PrimitiveKey,
    pub target: Shape,
    pub effect: AnimationEffect,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl AnimationPlan {
    #[must_use]
    pub fn immediate(primitive: &Primitive) -> Self {
        Self {
            key: primitive.key.clone(),
            target: primitive.shape.clone(),
            effect: AnimationEffect::Immediate,
            delay_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Time at which the plan reaches its target.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        matches!(self.effect, AnimationEffect::Immediate)
    }

    /// Eased progress in `[0, 1]` at `elapsed_ms` after the plan started.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_immediate() || elapsed_ms >= self.end_ms() {
            return 1.0;
        }
        if elapsed_ms <= self.delay_ms || self.duration_ms <= 0.0 {
            return 0.0;
        }
        self.easing
            .apply((elapsed_ms - self.delay_ms) / self.duration_ms)
    }

    #[must_use]
    pub fn shape_at(&self, elapsed_ms: f64) -> Shape {
        match &self.effect {
            AnimationEffect::Grow { from } => from.lerp(&self.target, self.progress_at(elapsed_ms)),
            AnimationEffect::StrokeReveal { .. }
            | AnimationEffect::FadeIn
            | AnimationEffect::Immediate => self.target.clone(),
        }
    }

    #[must_use]
    pub fn opacity_at(&self, elapsed_ms: f64) -> f64 {
        match self.effect {
            AnimationEffect::FadeIn => self.progress_at(elapsed_ms),
            _ => 1.0,
        }
    }

    /// Stroke dash offset for reveal plans.
    #[must_use]
    pub fn dash_offset_at(&self, elapsed_ms: f64) -> Option<f64> {
        match self.effect {
            AnimationEffect::StrokeReveal { path_length } => {
                Some(path_length * (1.0 - self.progress_at(elapsed_ms)))
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.delay_ms.is_finite()
            || !self.duration_ms.is_finite()
            || self.delay_ms < 0.0
            || self.duration_ms < 0.0
        {
            return Err(ChartError::InvalidData(format!(
                "animation plan `{}` timing must be finite and >= 0",
                self.key
            )));
        }
        self.target.validate()
    }
}

/// Builds entrance plans for the primitives that entered this pass.
///
/// Delays stagger by group index: the position of a primitive among the
/// entering primitives of the same role and series (for per-point shapes) or
/// of the same role (for per-series shapes). Updated primitives never get a
/// plan.
#[must_use]
pub fn schedule(
    kind: ChartKind,
    entered: &[Primitive],
    geometry: Geometry,
    config: AnimationConfig,
) -> Vec<AnimationPlan> {
    if !config.animate {
        return entered.iter().map(AnimationPlan::immediate).collect();
    }

    let mut group_counters: IndexMap<(PrimitiveRole, Option<&str>), usize> = IndexMap::new();
    entered
        .iter()
        .map(|primitive| {
            let group = if primitive.key.index().is_some() {
                (primitive.role(), primitive.key.series_key())
            } else {
                (primitive.role(), None)
            };
            let counter = group_counters.entry(group).or_insert(0);
            let group_index = *counter;
            *counter += 1;
            plan_for(kind, primitive, group_index, geometry, config)
        })
        .collect()
}

fn plan_for(
    kind: ChartKind,
    primitive: &Primitive,
    group_index: usize,
    geometry: Geometry,
    config: AnimationConfig,
) -> AnimationPlan {
    let staggered = group_index as f64 * config.delay_per_index_ms;
    let target = primitive.shape.clone();
    let plan = |effect, delay_ms, duration_ms, easing| AnimationPlan {
        key: primitive.key.clone(),
        target: target.clone(),
        effect,
        delay_ms,
        duration_ms,
        easing,
    };

    match (kind, primitive.role()) {
        (ChartKind::Pie, _) | (_, PrimitiveRole::Arc) => AnimationPlan::immediate(primitive),
        (ChartKind::Area, PrimitiveRole::Line) => plan(
            AnimationEffect::FadeIn,
            staggered,
            config.duration_ms * AREA_OUTLINE_DURATION_FACTOR,
            config.easing,
        ),
        (_, PrimitiveRole::Line) => plan(
            AnimationEffect::StrokeReveal {
                path_length: target.path_length(),
            },
            0.0,
            config.duration_ms,
            Easing::Linear,
        ),
        (ChartKind::Line, PrimitiveRole::Point) => plan(
            AnimationEffect::Grow {
                from: collapsed(primitive, geometry),
            },
            staggered,
            LINE_POINTER_GROW_MS,
            config.easing,
        ),
        (_, PrimitiveRole::Bar | PrimitiveRole::Point | PrimitiveRole::Bubble | PrimitiveRole::Area) => {
            plan(
                AnimationEffect::Grow {
                    from: collapsed(primitive, geometry),
                },
                staggered,
                config.duration_ms,
                config.easing,
            )
        }
    }
}

/// Starting geometry for grow effects: bars flattened onto their zero edge
/// (bottom for non-negative values, top for negative ones), areas onto their
/// baseline, circles at zero radius.
fn collapsed(primitive: &Primitive, geometry: Geometry) -> Shape {
    match &primitive.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            let zero_edge = match &primitive.datum {
                ShapeDatum::Point(point) if point.y.as_number().is_some_and(|v| v < 0.0) => *y,
                ShapeDatum::Point(_) => y + height,
                ShapeDatum::Series(_) | ShapeDatum::Slice(_) => geometry.plot_height,
            };
            Shape::Rect {
                x: *x,
                y: zero_edge,
                width: *width,
                height: 0.0,
            }
        }
        Shape::Circle { cx, cy, .. } => Shape::Circle {
            cx: *cx,
            cy: *cy,
            r: 0.0,
        },
        Shape::Area {
            vertices,
            baseline_y,
        } => Shape::Area {
            vertices: vertices
                .iter()
                .map(|vertex| PathVertex::new(vertex.x, *baseline_y))
                .collect(),
            baseline_y: *baseline_y,
        },
        Shape::Path { .. } | Shape::Arc(_) => primitive.shape.clone(),
    }
}
