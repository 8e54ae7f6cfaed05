use analytics::{calculate_confidence, calculate_trend, predict_next_period};
use proptest::prelude::*;

fn non_negative_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10_000.0, 0..24)
}

proptest! {
    #[test]
    fn forecast_is_never_negative(series in non_negative_series(), ahead in 1u32..12) {
        let predicted = predict_next_period(&series, ahead);
        prop_assert!(predicted >= 0.0);
        prop_assert_eq!(predicted, predicted.round());
    }

    #[test]
    fn confidence_stays_within_bounds(series in non_negative_series()) {
        let confidence = calculate_confidence(&series);
        prop_assert!((0.3..=0.95).contains(&confidence));
    }

    #[test]
    fn confidence_grows_with_more_of_the_same_pattern(
        pattern in prop::collection::vec(1.0f64..1_000.0, 1..6),
        repeats in 1usize..5,
    ) {
        // repeating a block keeps mean and variance fixed while adding samples
        let cycle = |times: usize| -> Vec<f64> {
            pattern.iter().copied().cycle().take(pattern.len() * times).collect()
        };
        let shorter = cycle(repeats);
        let longer = cycle(repeats + 1);
        prop_assert!(calculate_confidence(&longer) + 1e-9 >= calculate_confidence(&shorter));
    }

    #[test]
    fn calculators_are_pure(series in non_negative_series()) {
        prop_assert_eq!(calculate_trend(&series), calculate_trend(&series));
        prop_assert_eq!(
            predict_next_period(&series, 1).to_bits(),
            predict_next_period(&series, 1).to_bits()
        );
        prop_assert_eq!(
            calculate_confidence(&series).to_bits(),
            calculate_confidence(&series).to_bits()
        );
    }
}
