use crate::core::{AnnotatedPoint, AnnotatedSeries, Series};

/// Stamps series/point identities onto a fresh copy of `series`.
///
/// `series_index` follows the full list order while `enabled_rank` counts only
/// enabled series, so disabling one series shifts the rank of later enabled
/// series and nothing else. Runs every pass: ranks depend on the current
/// enabled subset.
#[must_use]
pub fn annotate(series: &[Series]) -> Vec<AnnotatedSeries> {
    let mut next_rank = 0usize;

    series
        .iter()
        .enumerate()
        .map(|(series_index, entry)| {
            let enabled_rank = if entry.disabled {
                None
            } else {
                let rank = next_rank;
                next_rank += 1;
                Some(rank)
            };

            let values = entry
                .values
                .iter()
                .enumerate()
                .map(|(point_index, point)| AnnotatedPoint {
                    x: point.x.clone(),
                    y: point.y.clone(),
                    r: point.r,
                    series_key: entry.key.clone(),
                    series_index,
                    point_index,
                    enabled_rank,
                })
                .collect();

            AnnotatedSeries {
                key: entry.key.clone(),
                series_index,
                enabled_rank,
                disabled: entry.disabled,
                values,
            }
        })
        .collect()
}

/// Enabled subset in input order.
#[must_use]
pub fn enabled_series(annotated: &[AnnotatedSeries]) -> Vec<&AnnotatedSeries> {
    annotated.iter().filter(|series| series.is_enabled()).collect()
}
