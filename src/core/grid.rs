use serde::{Deserialize, Serialize};

use crate::core::AxisScales;

/// Ticks spread over a continuous axis when drawing grid lines.
pub const GRID_TICK_COUNT: usize = 5;

/// Reference lines behind the plot, in plot coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    /// x positions of lines spanning the plot height.
    pub vertical: Vec<f64>,
    /// y positions of lines spanning the plot width.
    pub horizontal: Vec<f64>,
}

impl GridLines {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Grid lines follow the ticks of each visible axis.
#[must_use]
pub fn grid_lines(scales: &AxisScales, show_x_axis: bool, show_y_axis: bool) -> GridLines {
    GridLines {
        vertical: if show_x_axis {
            scales.x.tick_positions(GRID_TICK_COUNT)
        } else {
            Vec::new()
        },
        horizontal: if show_y_axis {
            scales.y.tick_positions(GRID_TICK_COUNT)
        } else {
            Vec::new()
        },
    }
}
