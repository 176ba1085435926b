#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use rotnet_report::chart::{compose, OutputSink, PlotRequest, Series};

    // Strategy for one metric sequence with finite values
    fn sequence_strategy() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(
            (-10.0f32..10.0).prop_filter("not NaN or Inf", |f| f.is_finite()),
            1..=64,
        )
    }

    // Strategy for a set of parallel runs (title + loss + accuracy per run)
    fn runs_strategy() -> impl Strategy<Value = Vec<(Vec<f32>, Vec<f32>)>> {
        prop::collection::vec((sequence_strategy(), sequence_strategy()), 1..=5)
    }

    fn request_from_runs(runs: &[(Vec<f32>, Vec<f32>)]) -> PlotRequest {
        let titles = (0..runs.len()).map(|i| format!("run {}", i)).collect();
        let losses = runs.iter().map(|(l, _)| l.clone()).collect();
        let accuracies = runs.iter().map(|(_, a)| a.clone()).collect();
        PlotRequest::new(titles, losses, accuracies, "prop")
    }

    proptest! {
        #[test]
        fn test_epoch_axis_is_one_to_length(values in sequence_strategy()) {
            let series = Series::from_epochs("s", &values);

            prop_assert_eq!(series.points.len(), values.len());
            for (i, &(x, y)) in series.points.iter().enumerate() {
                prop_assert_eq!(x, (i + 1) as f32);
                prop_assert_eq!(y, values[i]);
            }
        }

        #[test]
        fn test_grid_mode_produces_n_rows_of_two(runs in runs_strategy()) {
            let figure = compose(&request_from_runs(&runs));

            prop_assert_eq!(figure.rows, runs.len());
            prop_assert_eq!(figure.cols, 2);
            prop_assert_eq!(figure.panels.len(), runs.len() * 2);
            for panel in &figure.panels {
                prop_assert_eq!(panel.series.len(), 1);
            }
        }

        #[test]
        fn test_overlay_mode_produces_two_panels_of_n_lines(runs in runs_strategy()) {
            let figure = compose(&request_from_runs(&runs).overlay(true));

            prop_assert_eq!(figure.rows, 1);
            prop_assert_eq!(figure.cols, 2);
            prop_assert_eq!(figure.panels.len(), 2);
            for panel in &figure.panels {
                prop_assert_eq!(panel.series.len(), runs.len());
            }
        }

        #[test]
        fn test_marker_iff_both_values_exist_for_row(
            runs in runs_strategy(),
            epochs_len in 0usize..=6,
            accs_len in 0usize..=6,
        ) {
            let request = request_from_runs(&runs).markers(
                (0..epochs_len).map(|i| i as f32).collect(),
                (0..accs_len).map(|i| i as f32 / 10.0).collect(),
            );
            let figure = compose(&request);

            for (row, pair) in figure.panels.chunks(2).enumerate() {
                prop_assert!(pair[0].marker.is_none());
                let expected = row < epochs_len && row < accs_len;
                prop_assert_eq!(pair[1].marker.is_some(), expected);
            }
        }

        #[test]
        fn test_overlay_filenames_carry_comparison_suffix(
            stem in "[A-Za-z0-9 _-]{1,24}",
        ) {
            let sink = OutputSink::new("plot");
            let grid = sink.resolve(&stem, false);
            let overlay = sink.resolve(&stem, true);

            prop_assert_eq!(
                grid.file_name().unwrap().to_str().unwrap(),
                format!("{}.png", stem)
            );
            prop_assert_eq!(
                overlay.file_name().unwrap().to_str().unwrap(),
                format!("{}_comparison.png", stem)
            );
        }
    }
}
