use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{AnnotatedPoint, DomainValue, Value};
use crate::error::{ChartError, ChartResult, ConfigError, DataShapeError};

/// Radius upper bound used when a sqrt scale is requested without one.
pub const DEFAULT_RADIUS_CAP: f64 = 20.0;

/// Supported scale families.
///
/// Parsing is exhaustive: unknown names fail with
/// [`ConfigError::UnsupportedScaleKind`] instead of producing a no-op scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleKind {
    Band,
    Linear,
    Point,
    Sqrt,
}

impl ScaleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Band => "band",
            Self::Linear => "linear",
            Self::Point => "point",
            Self::Sqrt => "sqrt",
        }
    }
}

impl FromStr for ScaleKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "band" => Ok(Self::Band),
            "linear" => Ok(Self::Linear),
            // `ordinal` is the historical name for point spacing.
            "point" | "ordinal" => Ok(Self::Point),
            "sqrt" => Ok(Self::Sqrt),
            other => Err(ConfigError::UnsupportedScaleKind(other.to_owned())),
        }
    }
}

impl TryFrom<String> for ScaleKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScaleKind> for String {
    fn from(kind: ScaleKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data field a scale reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    R,
}

impl Axis {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::R => "r",
        }
    }

    fn value_of(self, point: &AnnotatedPoint) -> ChartResult<Value> {
        match self {
            Self::X => Ok(point.x.clone()),
            Self::Y => Ok(point.y.clone()),
            Self::R => point.r.map(Value::Number).ok_or_else(|| {
                DataShapeError::MissingRadius {
                    series: point.series_key.clone(),
                    point_index: point.point_index,
                }
                .into()
            }),
        }
    }

    fn number_of(self, point: &AnnotatedPoint) -> ChartResult<f64> {
        self.value_of(point)?.as_number().ok_or_else(|| {
            DataShapeError::NonNumericValue {
                series: point.series_key.clone(),
                point_index: point.point_index,
                axis: self.name(),
            }
            .into()
        })
    }
}

/// Half-up rounding: ties go towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Continuous domain-to-range mapping with optional pixel rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            round: false,
        })
    }

    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps `value` into the range. A zero-width domain maps to the range midpoint.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        let mapped = self.range_start * (1.0 - t) + self.range_end * t;
        if self.round {
            round_half_up(mapped)
        } else {
            mapped
        }
    }
}

/// Discrete domain spread over evenly sized bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<DomainValue>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
    step: f64,
    bandwidth: f64,
    offsets: Vec<f64>,
}

impl BandScale {
    #[must_use]
    pub fn new(domain: IndexSet<DomainValue>, range: (f64, f64)) -> Self {
        let mut scale = Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
            step: 0.0,
            bandwidth: 0.0,
            offsets: Vec::new(),
        };
        scale.rescale();
        scale
    }

    /// Sets inner and outer padding together, as a fraction of the step.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.rescale();
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self.rescale();
        self
    }

    fn points(domain: IndexSet<DomainValue>, range: (f64, f64), padding: f64) -> Self {
        let mut scale = Self::new(domain, range);
        scale.padding_inner = 1.0;
        scale.padding_outer = padding.max(0.0);
        scale.rescale();
        scale
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.range.1 < self.range.0;
        let (mut start, stop) = if reverse {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        };

        let mut step =
            (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (n - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = round_half_up(start);
            bandwidth = round_half_up(bandwidth);
        }

        let mut offsets: Vec<f64> = (0..self.domain.len())
            .map(|i| start + step * i as f64)
            .collect();
        if reverse {
            offsets.reverse();
        }

        self.step = step;
        self.bandwidth = bandwidth;
        self.offsets = offsets;
    }

    #[must_use]
    pub fn map(&self, value: &DomainValue) -> Option<f64> {
        self.domain
            .get_index_of(value)
            .and_then(|index| self.offsets.get(index).copied())
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<DomainValue> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Square-root mapping so circle area, not radius, tracks the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SqrtScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "sqrt scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "sqrt scale range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    fn transform(value: f64) -> f64 {
        value.signum() * value.abs().sqrt()
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let low = Self::transform(self.domain_start);
        let span = Self::transform(self.domain_end) - low;
        let t = if span == 0.0 {
            0.5
        } else {
            (Self::transform(value) - low) / span
        };
        self.range_start * (1.0 - t) + self.range_end * t
    }
}

/// Scale produced for one render pass. Owned by that pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Band(BandScale),
    Linear(LinearScale),
    Point(BandScale),
    Sqrt(SqrtScale),
}

impl Scale {
    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Band(_) => ScaleKind::Band,
            Self::Linear(_) => ScaleKind::Linear,
            Self::Point(_) => ScaleKind::Point,
            Self::Sqrt(_) => ScaleKind::Sqrt,
        }
    }

    /// Maps a data value to a range coordinate.
    ///
    /// Returns `None` for values outside a discrete domain or non-numeric
    /// values on a continuous scale.
    #[must_use]
    pub fn map(&self, value: &Value) -> Option<f64> {
        match self {
            Self::Band(scale) | Self::Point(scale) => scale.map(&value.domain_key()),
            Self::Linear(scale) => value.as_number().map(|number| scale.map(number)),
            Self::Sqrt(scale) => value.as_number().map(|number| scale.map(number)),
        }
    }

    /// Band width for band scales, `0.0` for everything else.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        match self {
            Self::Band(scale) => scale.bandwidth(),
            Self::Linear(_) | Self::Point(_) | Self::Sqrt(_) => 0.0,
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Band(scale) | Self::Point(scale) => scale.range(),
            Self::Linear(scale) => scale.range(),
            Self::Sqrt(scale) => scale.range(),
        }
    }

    /// Numeric domain bounds of continuous scales.
    #[must_use]
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self {
            Self::Linear(scale) => Some(scale.domain()),
            Self::Sqrt(scale) => Some(scale.domain()),
            Self::Band(_) | Self::Point(_) => None,
        }
    }

    /// Range coordinates of reference ticks.
    ///
    /// Discrete scales tick every member (band centers for band scales);
    /// continuous scales spread `count` ticks evenly across the domain.
    #[must_use]
    pub fn tick_positions(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Band(scale) | Self::Point(scale) => {
                let half = scale.bandwidth() / 2.0;
                scale
                    .domain()
                    .iter()
                    .filter_map(|member| scale.map(member))
                    .map(|offset| offset + half)
                    .collect()
            }
            Self::Linear(scale) => even_ticks(scale.domain(), count)
                .into_iter()
                .map(|value| scale.map(value))
                .collect(),
            Self::Sqrt(scale) => even_ticks(scale.domain(), count)
                .into_iter()
                .map(|value| scale.map(value))
                .collect(),
        }
    }

    /// Range coordinate of zero on continuous scales, clamped into the range.
    #[must_use]
    pub fn zero_position(&self) -> Option<f64> {
        let mapped = match self {
            Self::Linear(scale) => scale.map(0.0),
            Self::Sqrt(scale) => scale.map(0.0),
            Self::Band(_) | Self::Point(_) => return None,
        };
        let (start, end) = self.range();
        Some(mapped.clamp(start.min(end), start.max(end)))
    }

    /// Ordered members of discrete scales.
    #[must_use]
    pub fn discrete_domain(&self) -> Option<Vec<DomainValue>> {
        match self {
            Self::Band(scale) | Self::Point(scale) => {
                Some(scale.domain().iter().cloned().collect())
            }
            Self::Linear(_) | Self::Sqrt(_) => None,
        }
    }
}

/// Extra knobs a caller may apply to the produced scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    /// Band padding as a fraction of the step.
    pub band_padding: f64,
    /// Upper radius bound for sqrt scales.
    pub radius_cap: Option<f64>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            band_padding: 0.0,
            radius_cap: None,
        }
    }
}

/// Flattens every point of every series in order.
#[must_use]
pub fn flatten_points<'a, I>(series: I) -> Vec<&'a AnnotatedPoint>
where
    I: IntoIterator<Item = &'a crate::core::AnnotatedSeries>,
{
    series
        .into_iter()
        .flat_map(|entry| entry.values.iter())
        .collect()
}

/// Derives a scale over `points` for `axis` spanning `[range_low, range_high]`.
///
/// Vertical (`y`) positional scales are inverted so larger values land
/// closer to the top of the plot.
pub fn create_scale(
    kind: ScaleKind,
    points: &[&AnnotatedPoint],
    axis: Axis,
    range_low: f64,
    range_high: f64,
    options: ScaleOptions,
) -> ChartResult<Scale> {
    let span = range_high - range_low;
    if !span.is_finite() || span < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "scale range must be finite and ordered, got [{range_low}, {range_high}]"
        )));
    }
    let positional_range = if axis == Axis::Y {
        (span, 0.0)
    } else {
        (0.0, span)
    };

    match (kind, axis) {
        (ScaleKind::Band, Axis::X | Axis::Y) => {
            let domain = discrete_domain(points, axis)?;
            Ok(Scale::Band(
                BandScale::new(domain, positional_range)
                    .with_padding(options.band_padding)
                    .with_rounding(true),
            ))
        }
        (ScaleKind::Point, Axis::X | Axis::Y) => {
            let domain = discrete_domain(points, axis)?;
            Ok(Scale::Point(BandScale::points(domain, positional_range, 0.0)))
        }
        (ScaleKind::Linear, Axis::X | Axis::R) => {
            let (min, max) = extent(points, axis)?;
            let range = if axis == Axis::R {
                (1.0, options.radius_cap.unwrap_or(DEFAULT_RADIUS_CAP))
            } else {
                positional_range
            };
            Ok(Scale::Linear(
                LinearScale::new((min, max), range)?.with_rounding(axis != Axis::R),
            ))
        }
        (ScaleKind::Linear, Axis::Y) => {
            let (min, max) = extent(points, axis)?;
            // Include negative space only when the data goes below zero.
            let floor = min.min(0.0);
            Ok(Scale::Linear(
                LinearScale::new((floor, max), positional_range)?.with_rounding(true),
            ))
        }
        (ScaleKind::Sqrt, Axis::R) => {
            let (min, max) = extent(points, axis)?;
            let cap = options.radius_cap.unwrap_or(DEFAULT_RADIUS_CAP);
            Ok(Scale::Sqrt(SqrtScale::new((min, max), (1.0, cap))?))
        }
        (ScaleKind::Sqrt, Axis::X | Axis::Y) | (ScaleKind::Band | ScaleKind::Point, Axis::R) => {
            Err(ConfigError::InvalidOption {
                name: "scale_kind",
                reason: format!("`{kind}` cannot be used for the `{}` axis", axis.name()),
            }
            .into())
        }
    }
}

fn even_ticks(domain: (f64, f64), count: usize) -> Vec<f64> {
    let (start, end) = domain;
    if count == 0 {
        return Vec::new();
    }
    if count == 1 || start == end {
        return vec![start];
    }
    let denominator = (count - 1) as f64;
    (0..count)
        .map(|index| start + (end - start) * (index as f64 / denominator))
        .collect()
}

fn discrete_domain(points: &[&AnnotatedPoint], axis: Axis) -> ChartResult<IndexSet<DomainValue>> {
    let mut domain = IndexSet::with_capacity(points.len());
    for point in points {
        domain.insert(axis.value_of(point)?.domain_key());
    }
    Ok(domain)
}

fn extent(points: &[&AnnotatedPoint], axis: Axis) -> ChartResult<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for point in points {
        let value = axis.number_of(point)?;
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    Ok(bounds.unwrap_or((0.0, 0.0)))
}
