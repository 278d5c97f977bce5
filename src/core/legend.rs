use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ColorScale, Series, color::Color};
use crate::error::{ChartError, ChartResult};

/// Provisional spacing between legend entries before text is measured.
pub const LEGEND_ENTRY_SPACING_PX: f64 = 100.0;

/// Flips `disabled` on the series at `index` and returns the new list.
///
/// Indexes address the full list, matching how the legend enumerates
/// entries. A toggle that would leave nothing enabled re-enables every
/// series instead.
pub fn toggle(series: &[Series], index: usize) -> ChartResult<Vec<Series>> {
    if index >= series.len() {
        return Err(ChartError::InvalidData(format!(
            "legend index {index} out of range for {} series",
            series.len()
        )));
    }

    let mut next: Vec<Series> = series.to_vec();
    next[index].disabled = !next[index].disabled;

    if next.iter().all(|entry| entry.disabled) {
        debug!(index, "legend toggle would disable every series; re-enabling all");
        for entry in &mut next {
            entry.disabled = false;
        }
    }

    Ok(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LegendIcon {
    /// Solid swatch for enabled series.
    Filled { size: f64 },
    /// Outlined swatch for disabled series.
    Hollow {
        size: f64,
        inset: f64,
        stroke_width: f64,
    },
}

/// One legend row, in full-list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub series_index: usize,
    pub disabled: bool,
    pub color: Color,
    pub icon: LegendIcon,
    /// Horizontal offset; the presentation layer may replace it once label
    /// widths are known.
    pub offset_x: f64,
}

#[must_use]
pub fn legend_entries(series: &[Series], colors: &ColorScale) -> Vec<LegendEntry> {
    series
        .iter()
        .enumerate()
        .map(|(series_index, entry)| LegendEntry {
            key: entry.key.clone(),
            series_index,
            disabled: entry.disabled,
            color: colors.color(series_index),
            icon: if entry.disabled {
                LegendIcon::Hollow {
                    size: 8.0,
                    inset: 1.0,
                    stroke_width: 2.0,
                }
            } else {
                LegendIcon::Filled { size: 10.0 }
            },
            offset_x: series_index as f64 * LEGEND_ENTRY_SPACING_PX,
        })
        .collect()
}
