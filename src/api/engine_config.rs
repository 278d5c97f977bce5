use serde::{Deserialize, Serialize};

use crate::animation::{AnimationConfig, Easing};
use crate::core::scale::DEFAULT_RADIUS_CAP;
use crate::core::{
    AxisLabels, ChartKind, ColorAssignment, GradientStops, Margin, PieOptions, ScaleKind,
    ScaleSettings, ShapeOptions,
};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing fields fall back to the
/// bar-chart defaults; use [`ChartEngineConfig::for_kind`] for the defaults of
/// another chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_kind")]
    pub kind: ChartKind,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_x_scale_type")]
    pub x_scale_type: ScaleKind,
    #[serde(default = "default_y_scale_type")]
    pub y_scale_type: ScaleKind,
    #[serde(default)]
    pub r_scale_type: Option<ScaleKind>,
    #[serde(default = "default_radius_cap")]
    pub radius_cap: f64,
    #[serde(default = "default_true")]
    pub use_color_scale: bool,
    #[serde(default)]
    pub color_scale: GradientStops,
    /// Categorical palette; empty selects the built-in ten colors.
    #[serde(default)]
    pub palette: Vec<String>,
    #[serde(default)]
    pub color_assignment: ColorAssignment,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default = "default_true")]
    pub draw_scatter_pointers: bool,
    #[serde(default = "default_bar_spacing")]
    pub bar_spacing: f64,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_x_axis: bool,
    #[serde(default = "default_true")]
    pub show_y_axis: bool,
    #[serde(default)]
    pub axis_labels: AxisLabels,
    #[serde(default = "default_no_data_message")]
    pub no_data_message: String,
    #[serde(default)]
    pub pie: PieOptions,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::for_kind(ChartKind::Bar)
    }
}

impl ChartEngineConfig {
    /// Defaults used by each chart kind.
    #[must_use]
    pub fn for_kind(kind: ChartKind) -> Self {
        let base = Self {
            kind,
            width: default_width(),
            height: default_height(),
            margin: Margin::default(),
            x_scale_type: default_x_scale_type(),
            y_scale_type: default_y_scale_type(),
            r_scale_type: None,
            radius_cap: default_radius_cap(),
            use_color_scale: true,
            color_scale: GradientStops::default(),
            palette: Vec::new(),
            color_assignment: ColorAssignment::default(),
            animate: true,
            duration_ms: default_duration_ms(),
            delay_ms: default_delay_ms(),
            easing: Easing::default(),
            stroke_width: default_stroke_width(),
            point_size: default_point_size(),
            draw_scatter_pointers: true,
            bar_spacing: default_bar_spacing(),
            show_legend: true,
            show_grid: true,
            show_x_axis: true,
            show_y_axis: true,
            axis_labels: AxisLabels::default(),
            no_data_message: default_no_data_message(),
            pie: PieOptions::default(),
        };

        match kind {
            ChartKind::Bar => base,
            ChartKind::Line => Self {
                x_scale_type: ScaleKind::Point,
                delay_ms: 150.0,
                ..base
            },
            ChartKind::Area => Self {
                x_scale_type: ScaleKind::Point,
                ..base
            },
            ChartKind::Scatter => Self {
                x_scale_type: ScaleKind::Linear,
                point_size: 3.5,
                delay_ms: 100.0,
                ..base
            },
            ChartKind::Bubble => Self {
                x_scale_type: ScaleKind::Linear,
                r_scale_type: Some(ScaleKind::Sqrt),
                delay_ms: 100.0,
                ..base
            },
            ChartKind::Pie => Self {
                margin: Margin::new(10.0, 0.0, 10.0, 0.0),
                show_grid: false,
                show_x_axis: false,
                show_y_axis: false,
                ..base
            },
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_scale_types(mut self, x: ScaleKind, y: ScaleKind) -> Self {
        self.x_scale_type = x;
        self.y_scale_type = y;
        self
    }

    #[must_use]
    pub fn with_radius_scale(mut self, kind: Option<ScaleKind>, radius_cap: f64) -> Self {
        self.r_scale_type = kind;
        self.radius_cap = radius_cap;
        self
    }

    /// Switches between the two-stop gradient and a categorical palette.
    #[must_use]
    pub fn with_gradient(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.use_color_scale = true;
        self.color_scale = GradientStops::new(from, to);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.use_color_scale = false;
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_color_assignment(mut self, assignment: ColorAssignment) -> Self {
        self.color_assignment = assignment;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool, duration_ms: f64, delay_ms: f64) -> Self {
        self.animate = animate;
        self.duration_ms = duration_ms;
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    #[must_use]
    pub fn with_scatter_pointers(mut self, draw: bool) -> Self {
        self.draw_scatter_pointers = draw;
        self
    }

    #[must_use]
    pub fn with_bar_spacing(mut self, bar_spacing: f64) -> Self {
        self.bar_spacing = bar_spacing;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show_x_axis: bool, show_y_axis: bool) -> Self {
        self.show_x_axis = show_x_axis;
        self.show_y_axis = show_y_axis;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabels) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    #[must_use]
    pub fn with_pie(mut self, pie: PieOptions) -> Self {
        self.pie = pie;
        self
    }

    #[must_use]
    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig {
            animate: self.animate,
            duration_ms: self.duration_ms,
            delay_per_index_ms: self.delay_ms,
            easing: self.easing,
        }
    }

    #[must_use]
    pub fn scale_settings(&self) -> ScaleSettings {
        ScaleSettings {
            x: self.x_scale_type,
            y: self.y_scale_type,
            r: self.r_scale_type,
            band_padding: self.bar_spacing,
            radius_cap: self.radius_cap,
        }
    }

    #[must_use]
    pub fn shape_options(&self) -> ShapeOptions {
        ShapeOptions {
            stroke_width: self.stroke_width,
            point_size: self.point_size,
            draw_scatter_pointers: self.draw_scatter_pointers,
            pie: self.pie,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Option<&[String]> {
        (!self.palette.is_empty()).then_some(self.palette.as_slice())
    }
}

fn default_kind() -> ChartKind {
    ChartKind::Bar
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    200.0
}

fn default_x_scale_type() -> ScaleKind {
    ScaleKind::Band
}

fn default_y_scale_type() -> ScaleKind {
    ScaleKind::Linear
}

fn default_radius_cap() -> f64 {
    DEFAULT_RADIUS_CAP
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> f64 {
    500.0
}

fn default_delay_ms() -> f64 {
    50.0
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_point_size() -> f64 {
    2.0
}

fn default_bar_spacing() -> f64 {
    0.05
}

fn default_no_data_message() -> String {
    "No Data Available.".to_owned()
}
