use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::axis_label::TextAnchor;
use crate::core::primitives::{
    ArcGeometry, ArcLabel, PathVertex, PieSlice, Primitive, PrimitiveKey, PrimitiveRole,
    PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::shape::{PieOptions, ShapeBuilder, ShapeContext};
use crate::core::AnnotatedSeries;
use crate::error::{ChartError, ChartResult, DataShapeError};

/// Outer radius inset from the half-extent of the plot.
pub const PIE_OUTER_INSET_PX: f64 = 10.0;
/// Inner radius inset for doughnuts.
pub const DOUGHNUT_INNER_INSET_PX: f64 = 50.0;
/// Horizontal nudge applied to labels away from the center.
pub const PIE_LABEL_NUDGE_PX: f64 = 5.0;

/// One arc per enabled series, in series order.
pub struct PieShapes;

impl ShapeBuilder for PieShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Arc]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        let slices = layout_slices(enabled)?;
        let geometry = context.geometry;
        let radius = geometry.plot_width.min(geometry.plot_height) / 2.0;
        let outer_radius = (radius - PIE_OUTER_INSET_PX).max(0.0);
        let inner_radius = if context.options.pie.display_as_doughnut {
            (radius - DOUGHNUT_INNER_INSET_PX).max(0.0)
        } else {
            0.0
        };
        let center = PathVertex::new(geometry.plot_width / 2.0, geometry.plot_height / 2.0);

        Ok(slices
            .into_iter()
            .map(|slice| {
                let centroid = arc_centroid(&slice, inner_radius, outer_radius);
                let label = context
                    .options
                    .pie
                    .display_labels
                    .then(|| place_label(&slice, centroid, context.options.pie));
                let color = context.series_color(slice.series_index, Some(slice.index));
                Primitive::new(
                    PrimitiveKey::arc(slice.index),
                    Shape::Arc(ArcGeometry {
                        center,
                        start_angle: slice.start_angle,
                        end_angle: slice.end_angle,
                        inner_radius,
                        outer_radius,
                        centroid,
                        label,
                    }),
                    PrimitiveStyle::filled(color),
                    ShapeDatum::Slice(slice),
                )
            })
            .collect())
    }
}

/// Computes slice angles in series order (no sorting), clockwise from
/// twelve o'clock. A zero total yields zero-width slices.
pub fn layout_slices(enabled: &[&AnnotatedSeries]) -> ChartResult<Vec<PieSlice>> {
    let mut values = Vec::with_capacity(enabled.len());
    for series in enabled {
        let mut total = 0.0;
        for point in &series.values {
            let value = point.y.as_number().ok_or_else(|| DataShapeError::NonNumericValue {
                series: series.key.clone(),
                point_index: point.point_index,
                axis: "y",
            })?;
            total += value;
        }
        if !total.is_finite() || total < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pie slice `{}` must sum to a finite value >= 0",
                series.key
            )));
        }
        values.push(total);
    }

    let sum: f64 = values.iter().sum();
    let scale = if sum > 0.0 { TAU / sum } else { 0.0 };
    let mut angle = 0.0;
    Ok(enabled
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (series, value))| {
            let start_angle = angle;
            angle += value * scale;
            PieSlice {
                label: series.key.clone(),
                value,
                index,
                series_index: series.series_index,
                start_angle,
                end_angle: angle,
            }
        })
        .collect())
}

fn arc_centroid(slice: &PieSlice, inner_radius: f64, outer_radius: f64) -> PathVertex {
    let radius = (inner_radius + outer_radius) / 2.0;
    let angle = (slice.start_angle + slice.end_angle) / 2.0 - FRAC_PI_2;
    PathVertex::new(angle.cos() * radius, angle.sin() * radius)
}

fn place_label(slice: &PieSlice, centroid: PathVertex, options: PieOptions) -> ArcLabel {
    let mid_angle = centroid.y.atan2(centroid.x);
    let x = mid_angle.cos() * options.label_offset;
    let (sign, anchor) = if x > 0.0 {
        (1.0, TextAnchor::Start)
    } else {
        (-1.0, TextAnchor::End)
    };
    ArcLabel {
        text: format!("{}: {}", slice.label, format_precision(slice.value, 3)),
        x: x + PIE_LABEL_NUDGE_PX * sign,
        y: mid_angle.sin() * options.label_offset,
        anchor,
    }
}

/// Formats `value` with `digits` significant digits, switching to exponent
/// notation outside `[1e-6, 10^digits)`.
#[must_use]
pub fn format_precision(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = digits as i32;
    if exponent < -6 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    } else {
        format!("{:.*}", (digits - 1 - exponent) as usize, value)
    }
}
