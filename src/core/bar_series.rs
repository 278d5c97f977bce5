use crate::core::primitives::{
    Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::scale::Axis;
use crate::core::shape::{ShapeBuilder, ShapeContext, map_point};
use crate::core::AnnotatedSeries;
use crate::error::ChartResult;

/// Horizontal gap, in pixels, added to each slot when grouping bars.
pub const BAR_GROUP_GAP_PX: f64 = 2.0;

/// Grouped bars: one rect per point, side by side per enabled series.
pub struct BarShapes;

impl ShapeBuilder for BarShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Bar]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        project_bars(enabled, context)
    }
}

/// Projects enabled series into grouped bar rects.
///
/// Each category band is split into `enabled.len()` slots; a series occupies
/// the slot matching its enabled rank. Bars extend from the mapped value to
/// the zero line of the value scale, so negative values hang below it.
pub fn project_bars(
    enabled: &[&AnnotatedSeries],
    context: &ShapeContext<'_>,
) -> ChartResult<Vec<Primitive>> {
    if enabled.is_empty() {
        return Ok(Vec::new());
    }

    let scales = context.scales()?;
    let group_count = enabled.len() as f64;
    let bandwidth = scales.x.bandwidth();
    let slot = (bandwidth + BAR_GROUP_GAP_PX) / group_count;
    let width = bandwidth / group_count;
    let zero_y = scales
        .y
        .zero_position()
        .unwrap_or(context.geometry.plot_height);

    let mut bars = Vec::with_capacity(enabled.iter().map(|series| series.values.len()).sum());
    for series in enabled {
        let rank = series.enabled_rank.unwrap_or(0) as f64;
        let style = PrimitiveStyle::filled(
            context.series_color(series.series_index, series.enabled_rank),
        );
        for point in &series.values {
            let x = map_point(&scales.x, point, Axis::X)? + rank * slot;
            let y = map_point(&scales.y, point, Axis::Y)?;
            bars.push(Primitive::new(
                PrimitiveKey::point(PrimitiveRole::Bar, &series.key, point.point_index),
                Shape::Rect {
                    x,
                    y: y.min(zero_y),
                    width,
                    height: (y - zero_y).abs(),
                },
                style,
                ShapeDatum::Point(point.clone()),
            ));
        }
    }

    Ok(bars)
}
