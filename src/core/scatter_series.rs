use crate::core::primitives::{
    Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::scale::Axis;
use crate::core::shape::{ShapeBuilder, ShapeContext, map_point};
use crate::core::AnnotatedSeries;
use crate::error::ChartResult;

/// Fixed-size circles, one per point.
pub struct ScatterShapes;

impl ShapeBuilder for ScatterShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Point]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        let scales = context.scales()?;
        let mut points = Vec::new();
        for series in enabled {
            let style = PrimitiveStyle::filled(
                context.series_color(series.series_index, series.enabled_rank),
            );
            for point in &series.values {
                points.push(Primitive::new(
                    PrimitiveKey::point(PrimitiveRole::Point, &series.key, point.point_index),
                    Shape::Circle {
                        cx: map_point(&scales.x, point, Axis::X)?,
                        cy: map_point(&scales.y, point, Axis::Y)?,
                        r: context.options.point_size,
                    },
                    style,
                    ShapeDatum::Point(point.clone()),
                ));
            }
        }
        Ok(points)
    }
}
