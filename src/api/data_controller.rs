use tracing::debug;

use crate::core::Series;
use crate::error::{ChartResult, ConfigError};
use crate::render::Renderer;

use super::validation::{validate_config, validate_series};
use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the series list. Takes effect on the next render.
    pub fn set_data(&mut self, series: Vec<Series>) -> ChartResult<()> {
        validate_series(&series, self.config.kind)?;
        debug!(
            series = series.len(),
            enabled = series.iter().filter(|entry| !entry.disabled).count(),
            points = series.iter().map(|entry| entry.values.len()).sum::<usize>(),
            "set chart data"
        );
        self.series = series;
        Ok(())
    }

    /// Replaces the configuration. The chart kind is fixed at construction.
    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        if config.kind != self.config.kind {
            return Err(ConfigError::InvalidOption {
                name: "kind",
                reason: format!(
                    "chart kind is fixed at construction ({:?})",
                    self.config.kind
                ),
            }
            .into());
        }
        let geometry = validate_config(&config)?;
        self.config = config;
        self.geometry = geometry;
        Ok(())
    }

    /// Resizes the outer chart bounds, keeping margins.
    pub fn set_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let config = self.config.clone().with_size(width, height);
        let geometry = validate_config(&config)?;
        debug!(width, height, "chart resized");
        self.config = config;
        self.geometry = geometry;
        Ok(())
    }
}
