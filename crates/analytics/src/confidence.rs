use crate::stats::coefficient_of_variation;
use configuration::ForecastSettings;

/// Estimates how much a forecast over `series` can be trusted.
///
/// Low relative variability and more samples both raise the score. The
/// result always lies between the configured minimum (0.3) and maximum (0.95).
pub fn calculate_confidence(series: &[f64]) -> f64 {
    calculate_confidence_with(series, &ForecastSettings::default())
}

pub fn calculate_confidence_with(series: &[f64], settings: &ForecastSettings) -> f64 {
    if series.len() < settings.min_confidence_points {
        return settings.min_confidence;
    }

    let Some(cv) = coefficient_of_variation(series) else {
        // All-zero history: nothing to extrapolate from.
        tracing::debug!(points = series.len(), "Zero-mean series, using minimum confidence.");
        return settings.min_confidence;
    };

    let base = (1.0 - cv).clamp(settings.min_confidence, settings.max_confidence);
    let data_bonus = (series.len() as f64 * settings.confidence_bonus_per_point)
        .min(settings.max_confidence_bonus);

    (base + data_bonus).min(settings.max_confidence)
}
