use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}

/// Chart setup problems detected before any scale or reconciliation work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported scale kind `{0}`")]
    UnsupportedScaleKind(String),

    #[error("series at index {index} has no key")]
    MissingSeriesKey { index: usize },

    #[error("series key `{key}` is used more than once")]
    DuplicateSeriesKey { key: String },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

/// Data that does not fit the scales or shapes requested for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataShapeError {
    #[error("series `{series}` point {point_index}: `{axis}` value must be numeric")]
    NonNumericValue {
        series: String,
        point_index: usize,
        axis: &'static str,
    },

    #[error("series `{series}` point {point_index}: missing radius value")]
    MissingRadius { series: String, point_index: usize },
}
