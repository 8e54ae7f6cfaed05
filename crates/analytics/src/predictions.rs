use crate::confidence::calculate_confidence_with;
use crate::forecast::predict_next_period;
use crate::trend::calculate_trend_with_band;
use configuration::ForecastSettings;
use core_types::{metric_series, Metric, Prediction, StatsSnapshot, TimeSeriesPoint};

/// Forecasts leads, conversions and revenue, in that order.
///
/// Returns nothing unless the history holds at least three periods. The
/// snapshot is not consulted; forecasts depend only on the history.
pub fn generate_predictions(stats: &StatsSnapshot, history: &[TimeSeriesPoint]) -> Vec<Prediction> {
    generate_predictions_with(stats, history, &ForecastSettings::default())
}

pub fn generate_predictions_with(
    _stats: &StatsSnapshot,
    history: &[TimeSeriesPoint],
    settings: &ForecastSettings,
) -> Vec<Prediction> {
    let Some(last) = history.last() else {
        return vec![];
    };
    if history.len() < settings.min_history {
        tracing::debug!(
            periods = history.len(),
            required = settings.min_history,
            "Not enough history to forecast."
        );
        return vec![];
    }

    Metric::ALL
        .iter()
        .map(|&metric| {
            let series = metric_series(history, metric);
            Prediction {
                metric: metric.label().to_string(),
                current_value: last.value(metric),
                predicted_value: predict_next_period(&series, settings.periods_ahead),
                confidence: calculate_confidence_with(&series, settings),
                trend: calculate_trend_with_band(&series, settings.trend_stable_band).direction,
                reasoning: reasoning(metric, series.len()),
            }
        })
        .collect()
}

fn reasoning(metric: Metric, periods: usize) -> String {
    match metric {
        Metric::Leads => format!(
            "Baseado na tendência de captação dos últimos {} períodos",
            periods
        ),
        Metric::Conversions => format!(
            "Baseado no histórico de conversões dos últimos {} períodos",
            periods
        ),
        Metric::Revenue => format!(
            "Projeção de receita a partir dos últimos {} períodos",
            periods
        ),
    }
}
