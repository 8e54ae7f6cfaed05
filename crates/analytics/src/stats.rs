//! Small descriptive-statistics helpers shared by the calculators.

/// Arithmetic mean, or `None` for an empty series.
pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.iter().sum::<f64>() / series.len() as f64)
}

/// Population variance (divides by `n`), or `None` for an empty series.
pub fn population_variance(series: &[f64]) -> Option<f64> {
    let mean = mean(series)?;
    let sum_sq: f64 = series.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some(sum_sq / series.len() as f64)
}

/// Population standard deviation divided by the mean.
///
/// Returns `None` when the series is empty or its mean is zero, where the
/// ratio is undefined.
pub fn coefficient_of_variation(series: &[f64]) -> Option<f64> {
    let mean = mean(series)?;
    if mean == 0.0 {
        return None;
    }
    let std_dev = population_variance(series)?.sqrt();
    Some(std_dev / mean)
}
