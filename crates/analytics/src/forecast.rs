use crate::trend::calculate_trend;

/// Forecast horizon used when none is configured.
pub const DEFAULT_PERIODS_AHEAD: u32 = 1;

/// Predicts the value `periods_ahead` periods after the end of `series`.
///
/// The estimate is a linearly weighted moving average (the newest point
/// weighs the most) shifted by the fitted trend slope per period ahead. The
/// result is rounded to the nearest whole number and never negative. An
/// empty series predicts 0, and a horizon of 0 is treated as 1.
pub fn predict_next_period(series: &[f64], periods_ahead: u32) -> f64 {
    let Some(average) = weighted_average(series) else {
        return 0.0;
    };

    let slope = calculate_trend(series).slope;
    let adjustment = slope * f64::from(periods_ahead.max(1));

    let predicted = (average + adjustment).round();
    // Also folds -0.0 into 0.0.
    if predicted > 0.0 {
        predicted
    } else {
        0.0
    }
}

/// Average where the i-th point (1-based, oldest first) has weight i.
pub fn weighted_average(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let (weighted_sum, weight_sum) = series
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(ws, w), (i, v)| {
            let weight = (i + 1) as f64;
            (ws + v * weight, w + weight)
        });
    Some(weighted_sum / weight_sum)
}
