//! chart-kit: rendering core for multi-series statistical charts.
//!
//! Line, area, bar, scatter, bubble, and pie charts share one pipeline:
//! series annotation, scale and color derivation, keyed primitive
//! reconciliation, staggered entrance animation, and legend-driven series
//! toggling. Drawing is delegated to a [`render::Renderer`] adapter.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
