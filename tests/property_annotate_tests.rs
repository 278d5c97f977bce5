use chart_kit::core::{DataPoint, Series, annotate, enabled_series};
use proptest::prelude::*;

fn build_series(flags: &[bool]) -> Vec<Series> {
    flags
        .iter()
        .enumerate()
        .map(|(index, disabled)| {
            Series::new(format!("s{index}"), vec![DataPoint::new("a", index as f64)])
                .with_disabled(*disabled)
        })
        .collect()
}

proptest! {
    #[test]
    fn enabled_ranks_are_dense_and_ordered(flags in prop::collection::vec(any::<bool>(), 0..16)) {
        let series = build_series(&flags);
        let annotated = annotate(&series);

        prop_assert_eq!(annotated.len(), series.len());
        let enabled = enabled_series(&annotated);
        for (rank, entry) in enabled.iter().enumerate() {
            prop_assert_eq!(entry.enabled_rank, Some(rank));
        }
        for (index, entry) in annotated.iter().enumerate() {
            prop_assert_eq!(entry.series_index, index);
            prop_assert_eq!(entry.enabled_rank.is_none(), flags[index]);
            for point in &entry.values {
                prop_assert_eq!(point.series_index, index);
                prop_assert_eq!(point.enabled_rank, entry.enabled_rank);
            }
        }
    }
}
