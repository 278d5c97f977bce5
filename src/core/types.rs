use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Raw axis value as supplied by the caller.
///
/// Categories and numbers share one type because `x` may be either, and JSON
/// payloads commonly carry numeric values as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Hashable identity used by discrete (band/point) domains.
    #[must_use]
    pub fn domain_key(&self) -> DomainValue {
        match self {
            Self::Number(value) => DomainValue::Number(OrderedFloat(*value)),
            Self::Text(text) => DomainValue::Category(text.clone()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Discrete domain member with total ordering and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DomainValue {
    Number(OrderedFloat<f64>),
    Category(String),
}

impl From<&Value> for DomainValue {
    fn from(value: &Value) -> Self {
        value.domain_key()
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_owned())
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: Value,
    pub y: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<Value>, y: f64) -> Self {
        Self {
            x: x.into(),
            y: Value::Number(y),
            r: None,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }
}

/// One named group of points. `key` is the identity used across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<DataPoint>,
    #[serde(default)]
    pub disabled: bool,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, values: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            values,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Loads a series list from a JSON array of `{ key, values, disabled? }`.
pub fn series_from_json_str(input: &str) -> ChartResult<Vec<Series>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse series json payload: {e}")))
}

/// Point stamped with the identities assigned for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub x: Value,
    pub y: Value,
    pub r: Option<f64>,
    pub series_key: String,
    pub series_index: usize,
    pub point_index: usize,
    /// Position of the owning series within the enabled subset.
    pub enabled_rank: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSeries {
    pub key: String,
    pub series_index: usize,
    pub enabled_rank: Option<usize>,
    pub disabled: bool,
    pub values: Vec<AnnotatedPoint>,
}

impl AnnotatedSeries {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Outer spacing between the chart bounds and the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 10.0, 30.0, 40.0)
    }
}
