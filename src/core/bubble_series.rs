use crate::core::primitives::{
    Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::scale::Axis;
use crate::core::shape::{ShapeBuilder, ShapeContext, map_point};
use crate::core::AnnotatedSeries;
use crate::error::{ChartResult, DataShapeError};

/// Circles sized by each point's `r` through the radius scale.
pub struct BubbleShapes;

impl ShapeBuilder for BubbleShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Bubble]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        let scales = context.scales()?;
        let radius_scale = context.radius_scale()?;

        let mut bubbles = Vec::new();
        for series in enabled {
            let style = PrimitiveStyle::filled(
                context.series_color(series.series_index, series.enabled_rank),
            );
            for point in &series.values {
                if point.r.is_none() {
                    return Err(DataShapeError::MissingRadius {
                        series: series.key.clone(),
                        point_index: point.point_index,
                    }
                    .into());
                }
                bubbles.push(Primitive::new(
                    PrimitiveKey::point(PrimitiveRole::Bubble, &series.key, point.point_index),
                    Shape::Circle {
                        cx: map_point(&scales.x, point, Axis::X)?,
                        cy: map_point(&scales.y, point, Axis::Y)?,
                        r: map_point(radius_scale, point, Axis::R)?,
                    },
                    style,
                    ShapeDatum::Point(point.clone()),
                ));
            }
        }
        Ok(bubbles)
    }
}
