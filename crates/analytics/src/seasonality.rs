use crate::stats::coefficient_of_variation;
use configuration::ForecastSettings;
use core_types::{metric_series, Metric, SeasonalityPattern, TimeSeriesPoint};
use serde::{Deserialize, Serialize};

/// Variability of lead volume across the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seasonality {
    pub has_seasonality: bool,
    pub pattern: SeasonalityPattern,
    /// Zero when there are too few points or lead volume is flat zero.
    pub coefficient_of_variation: f64,
}

/// Flags histories whose lead counts vary a lot from period to period.
///
/// The pattern is reported for every history long enough to analyse, even
/// when `has_seasonality` is false; callers decide how to use it.
pub fn detect_seasonality(history: &[TimeSeriesPoint]) -> Seasonality {
    detect_seasonality_with(history, &ForecastSettings::default())
}

pub fn detect_seasonality_with(
    history: &[TimeSeriesPoint],
    settings: &ForecastSettings,
) -> Seasonality {
    if history.len() < settings.min_seasonality_points {
        return Seasonality {
            has_seasonality: false,
            pattern: SeasonalityPattern::InsufficientData,
            coefficient_of_variation: 0.0,
        };
    }

    let leads = metric_series(history, Metric::Leads);
    // A history without any leads has no variation to speak of.
    let cv = coefficient_of_variation(&leads).unwrap_or(0.0);

    let pattern = if cv > settings.high_variation_threshold {
        SeasonalityPattern::HighVariation
    } else {
        SeasonalityPattern::ModerateVariation
    };

    Seasonality {
        has_seasonality: cv > settings.seasonality_threshold,
        pattern,
        coefficient_of_variation: cv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn history(leads: &[u64]) -> Vec<TimeSeriesPoint> {
        leads
            .iter()
            .enumerate()
            .map(|(i, &l)| TimeSeriesPoint::new(format!("p{}", i), l, 0, Decimal::ZERO).unwrap())
            .collect()
    }

    #[test]
    fn fewer_than_four_points_is_insufficient() {
        let result = detect_seasonality(&history(&[10, 50, 10]));
        assert!(!result.has_seasonality);
        assert_eq!(result.pattern, SeasonalityPattern::InsufficientData);
    }

    #[test]
    fn large_swings_are_high_variation() {
        // mean 15, std 5
        let result = detect_seasonality(&history(&[10, 20, 10, 20]));
        assert!(result.has_seasonality);
        assert_eq!(result.pattern, SeasonalityPattern::HighVariation);
    }

    #[test]
    fn medium_swings_are_moderate_variation() {
        // mean 8, std 2
        let result = detect_seasonality(&history(&[6, 10, 6, 10]));
        assert!(result.has_seasonality);
        assert_eq!(result.pattern, SeasonalityPattern::ModerateVariation);
        assert!((result.coefficient_of_variation - 0.25).abs() < 1e-12);
    }

    #[test]
    fn thresholds_are_exclusive() {
        // mean 10, std 2: exactly at the seasonality threshold.
        let at_seasonal = detect_seasonality(&history(&[8, 12, 8, 12]));
        assert_eq!(at_seasonal.coefficient_of_variation, 0.2);
        assert!(!at_seasonal.has_seasonality);
        assert_eq!(at_seasonal.pattern, SeasonalityPattern::ModerateVariation);

        // mean 10, std 3: exactly at the high-variation threshold.
        let at_high = detect_seasonality(&history(&[7, 13, 7, 13]));
        assert_eq!(at_high.coefficient_of_variation, 0.3);
        assert!(at_high.has_seasonality);
        assert_eq!(at_high.pattern, SeasonalityPattern::ModerateVariation);
    }

    #[test]
    fn small_swings_are_not_seasonal_but_keep_a_pattern() {
        let result = detect_seasonality(&history(&[100, 105, 100, 105]));
        assert!(!result.has_seasonality);
        assert_eq!(result.pattern, SeasonalityPattern::ModerateVariation);
    }

    #[test]
    fn zero_leads_are_not_seasonal() {
        let result = detect_seasonality(&history(&[0, 0, 0, 0, 0]));
        assert!(!result.has_seasonality);
        assert_eq!(result.coefficient_of_variation, 0.0);
        assert_eq!(result.pattern, SeasonalityPattern::ModerateVariation);
    }
}
