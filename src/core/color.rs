use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult, ConfigError};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(input.to_owned());
        let digits = input.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Formats as `#rrggbb`, rounding each channel half-up.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    /// Channel-wise linear interpolation; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_hex(value)
    }
}

/// Built-in ten-color categorical palette.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Two-stop gradient configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStops {
    pub from: String,
    pub to: String,
}

impl GradientStops {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Default for GradientStops {
    fn default() -> Self {
        Self::new("#008793", "#00bf72")
    }
}

/// Index-to-color lookup for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    Gradient {
        from: Color,
        to: Color,
        series_count: usize,
    },
    Palette(SmallVec<[Color; 10]>),
}

impl ColorScale {
    /// Builds the lookup from the chart's color configuration.
    ///
    /// An empty or missing `palette` falls back to [`CATEGORY10`].
    pub fn new(
        series_count: usize,
        use_gradient: bool,
        gradient: &GradientStops,
        palette: Option<&[String]>,
    ) -> ChartResult<Self> {
        if use_gradient {
            return Ok(Self::Gradient {
                from: Color::from_hex(&gradient.from)?,
                to: Color::from_hex(&gradient.to)?,
                series_count,
            });
        }

        let colors = match palette {
            Some(entries) if !entries.is_empty() => entries
                .iter()
                .map(|entry| Color::from_hex(entry))
                .collect::<Result<SmallVec<[Color; 10]>, _>>()?,
            _ => CATEGORY10
                .iter()
                .map(|entry| Color::from_hex(entry))
                .collect::<Result<SmallVec<[Color; 10]>, _>>()?,
        };
        Ok(Self::Palette(colors))
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        match self {
            Self::Gradient {
                from,
                to,
                series_count,
            } => {
                let last = series_count.saturating_sub(1);
                // A single-entry domain has no spread: use the midpoint.
                let t = if last == 0 {
                    0.5
                } else {
                    index as f64 / last as f64
                };
                from.lerp(*to, t)
            }
            Self::Palette(colors) => colors[index % colors.len()],
        }
    }
}
