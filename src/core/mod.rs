pub mod annotate;
pub mod area_series;
pub mod axis_label;
pub mod bar_series;
pub mod bubble_series;
pub mod color;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod scatter_series;
pub mod shape;
pub mod types;

pub use annotate::{annotate, enabled_series};
pub use axis_label::{AxisLabelPlacement, AxisLabels, NoDataPlaceholder, TextAnchor};
pub use color::{Color, ColorScale, GradientStops};
pub use geometry::{AxisScales, Geometry, ScaleSettings, resolve_axis_scales};
pub use grid::{GridLines, grid_lines};
pub use legend::{LegendEntry, LegendIcon, legend_entries, toggle};
pub use primitives::{
    PieSlice, Primitive, PrimitiveKey, PrimitiveRole, PrimitiveStyle, Shape, ShapeDatum,
};
pub use scale::{Axis, BandScale, LinearScale, Scale, ScaleKind, SqrtScale, create_scale};
pub use shape::{ChartKind, ColorAssignment, PieOptions, ShapeBuilder, ShapeContext, ShapeOptions};
pub use types::{
    AnnotatedPoint, AnnotatedSeries, DataPoint, DomainValue, Margin, Series, Value,
    series_from_json_str,
};
