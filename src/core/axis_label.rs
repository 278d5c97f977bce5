use serde::{Deserialize, Serialize};

use crate::core::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XLabelPosition {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YLabelPosition {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Axis caption configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default)]
    pub x_label_position: XLabelPosition,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default)]
    pub y_label_position: YLabelPosition,
}

fn default_x_label() -> String {
    "X Axis".to_owned()
}

fn default_y_label() -> String {
    "Y Axis".to_owned()
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x_label: default_x_label(),
            x_label_position: XLabelPosition::default(),
            y_label: default_y_label(),
            y_label_position: YLabelPosition::default(),
        }
    }
}

/// Caption anchor in axis-local coordinates.
///
/// Y captions are expressed in the rotated (-90 degree) frame, so `x` runs
/// along the plot height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub rotation_deg: f64,
}

#[must_use]
pub fn place_x_label(labels: &AxisLabels, geometry: Geometry) -> Option<AxisLabelPlacement> {
    if labels.x_label.is_empty() {
        return None;
    }
    let (x, anchor) = match labels.x_label_position {
        XLabelPosition::Left => (0.0, TextAnchor::Start),
        XLabelPosition::Center => (geometry.plot_width / 2.0, TextAnchor::Middle),
        XLabelPosition::Right => (geometry.plot_width, TextAnchor::End),
    };
    Some(AxisLabelPlacement {
        text: labels.x_label.clone(),
        x,
        y: 30.0,
        anchor,
        rotation_deg: 0.0,
    })
}

#[must_use]
pub fn place_y_label(labels: &AxisLabels, geometry: Geometry) -> Option<AxisLabelPlacement> {
    if labels.y_label.is_empty() {
        return None;
    }
    let (x, anchor) = match labels.y_label_position {
        YLabelPosition::Top => (0.0, TextAnchor::End),
        YLabelPosition::Middle => (-geometry.plot_height / 2.0, TextAnchor::Middle),
        YLabelPosition::Bottom => (-geometry.plot_height, TextAnchor::Start),
    };
    Some(AxisLabelPlacement {
        text: labels.y_label.clone(),
        x,
        y: -30.0,
        anchor,
        rotation_deg: -90.0,
    })
}

/// Message shown in place of the plot when nothing is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDataPlaceholder {
    pub message: String,
    pub x: f64,
    pub y: f64,
}

impl NoDataPlaceholder {
    #[must_use]
    pub fn centered(message: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            message: message.into(),
            x: geometry.plot_width / 2.0,
            y: geometry.plot_height / 2.0,
        }
    }
}
