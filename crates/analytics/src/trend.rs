use core_types::TrendDirection;
use serde::{Deserialize, Serialize};

/// Slopes whose magnitude does not exceed this are classified as stable.
pub const DEFAULT_STABLE_BAND: f64 = 0.1;

/// Result of fitting a straight line through a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Change in value per period.
    pub slope: f64,
    pub direction: TrendDirection,
}

impl Trend {
    /// The trend reported when there is not enough data to fit a line.
    pub fn flat() -> Self {
        Self {
            slope: 0.0,
            direction: TrendDirection::Stable,
        }
    }
}

/// Fits an ordinary least-squares line of value against index (0, 1, ..).
///
/// Series with fewer than two points are reported as a flat, stable trend.
pub fn calculate_trend(series: &[f64]) -> Trend {
    calculate_trend_with_band(series, DEFAULT_STABLE_BAND)
}

/// Same as [`calculate_trend`] with a custom stable band.
pub fn calculate_trend_with_band(series: &[f64], stable_band: f64) -> Trend {
    let n = series.len();
    if n < 2 {
        return Trend::flat();
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    // Indices are distinct, so the denominator is positive for n >= 2.
    let slope = (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_x2 - sum_x * sum_x);

    Trend {
        slope,
        direction: classify(slope, stable_band),
    }
}

fn classify(slope: f64, stable_band: f64) -> TrendDirection {
    if slope > stable_band {
        TrendDirection::Up
    } else if slope < -stable_band {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_are_stable() {
        assert_eq!(calculate_trend(&[]), Trend::flat());
        assert_eq!(calculate_trend(&[5.0]), Trend::flat());
    }

    #[test]
    fn unit_increments_have_unit_slope() {
        let trend = calculate_trend(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(trend.slope, 1.0);
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn constant_series_is_stable() {
        let trend = calculate_trend(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn falling_series_is_down() {
        let trend = calculate_trend(&[30.0, 20.0, 10.0]);
        assert_eq!(trend.slope, -10.0);
        assert_eq!(trend.direction, TrendDirection::Down);
    }

    #[test]
    fn slope_on_the_band_edge_is_stable() {
        // slope of exactly 0.1 is not strictly above the band
        assert_eq!(classify(0.1, DEFAULT_STABLE_BAND), TrendDirection::Stable);
        assert_eq!(classify(-0.1, DEFAULT_STABLE_BAND), TrendDirection::Stable);
        assert_eq!(classify(0.11, DEFAULT_STABLE_BAND), TrendDirection::Up);
        assert_eq!(classify(-0.11, DEFAULT_STABLE_BAND), TrendDirection::Down);
    }

    #[test]
    fn wider_band_absorbs_gentle_slopes() {
        let trend = calculate_trend_with_band(&[10.0, 11.0, 12.0], 2.0);
        assert_eq!(trend.slope, 1.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }
}
