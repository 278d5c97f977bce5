use crate::core::primitives::{
    PathVertex, Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::scale::{Axis, Scale};
use crate::core::shape::{ShapeBuilder, ShapeContext, map_point};
use crate::core::{AnnotatedPoint, AnnotatedSeries};
use crate::error::ChartResult;

/// One stroked path per series, with optional point markers.
pub struct LineShapes;

impl ShapeBuilder for LineShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Line, PrimitiveRole::Point]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        let scales = context.scales()?;
        let mut primitives = Vec::new();
        for series in enabled {
            let color = context.series_color(series.series_index, series.enabled_rank);
            primitives.push(Primitive::new(
                PrimitiveKey::series(PrimitiveRole::Line, &series.key),
                Shape::Path {
                    vertices: project_vertices(&series.values, &scales.x, &scales.y)?,
                },
                PrimitiveStyle::stroked(color, context.options.stroke_width),
                ShapeDatum::Series((*series).clone()),
            ));

            if context.options.draw_scatter_pointers {
                for point in &series.values {
                    primitives.push(Primitive::new(
                        PrimitiveKey::point(PrimitiveRole::Point, &series.key, point.point_index),
                        Shape::Circle {
                            cx: map_point(&scales.x, point, Axis::X)?,
                            cy: map_point(&scales.y, point, Axis::Y)?,
                            r: context.options.point_size,
                        },
                        PrimitiveStyle::filled(color),
                        ShapeDatum::Point(point.clone()),
                    ));
                }
            }
        }
        Ok(primitives)
    }
}

/// Maps points to pixel vertices in data order.
pub fn project_vertices(
    points: &[AnnotatedPoint],
    x_scale: &Scale,
    y_scale: &Scale,
) -> ChartResult<Vec<PathVertex>> {
    let mut vertices = Vec::with_capacity(points.len());
    for point in points {
        vertices.push(PathVertex::new(
            map_point(x_scale, point, Axis::X)?,
            map_point(y_scale, point, Axis::Y)?,
        ));
    }
    Ok(vertices)
}
