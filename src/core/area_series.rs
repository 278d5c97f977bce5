use crate::core::line_series::project_vertices;
use crate::core::primitives::{
    Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
use crate::core::shape::{ShapeBuilder, ShapeContext};
use crate::core::AnnotatedSeries;
use crate::error::ChartResult;

/// Filled region under each series plus its outline.
///
/// The fill is anchored at the plot bottom (`plot_height`).
pub struct AreaShapes;

impl ShapeBuilder for AreaShapes {
    fn roles(&self) -> &'static [PrimitiveRole] {
        &[PrimitiveRole::Line, PrimitiveRole::Area]
    }

    fn build(
        &self,
        enabled: &[&AnnotatedSeries],
        context: &ShapeContext<'_>,
    ) -> ChartResult<Vec<Primitive>> {
        let scales = context.scales()?;
        let baseline_y = context.geometry.plot_height;

        let mut primitives = Vec::with_capacity(enabled.len() * 2);
        for series in enabled {
            let color = context.series_color(series.series_index, series.enabled_rank);
            let vertices = project_vertices(&series.values, &scales.x, &scales.y)?;

            primitives.push(Primitive::new(
                PrimitiveKey::series(PrimitiveRole::Line, &series.key),
                Shape::Path {
                    vertices: vertices.clone(),
                },
                PrimitiveStyle::stroked(color, context.options.stroke_width),
                ShapeDatum::Series((*series).clone()),
            ));
            primitives.push(Primitive::new(
                PrimitiveKey::series(PrimitiveRole::Area, &series.key),
                Shape::Area {
                    vertices,
                    baseline_y,
                },
                PrimitiveStyle::filled(color),
                ShapeDatum::Series((*series).clone()),
            ));
        }
        Ok(primitives)
    }
}
