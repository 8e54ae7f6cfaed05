use crate::benchmarks::generate_benchmarks_with;
use crate::confidence::calculate_confidence_with;
use crate::error::AnalyticsError;
use crate::forecast::predict_next_period;
use crate::insights::generate_insights_with;
use crate::predictions::generate_predictions_with;
use crate::report::AnalyticsReport;
use crate::seasonality::{detect_seasonality_with, Seasonality};
use crate::trend::{calculate_trend_with_band, Trend};
use configuration::AnalyticsConfig;
use core_types::{Benchmark, Insight, Prediction, StatsSnapshot, TimeSeriesPoint};

/// A stateless calculator for deriving forecasts and recommendations from CRM aggregates.
///
/// The engine only holds its immutable configuration, so one instance can be
/// shared freely between threads and requests.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Creates an engine with the reference thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom thresholds, rejecting inconsistent ones.
    pub fn with_config(config: AnalyticsConfig) -> Result<Self, AnalyticsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn calculate_trend(&self, series: &[f64]) -> Trend {
        calculate_trend_with_band(series, self.config.forecast.trend_stable_band)
    }

    /// Predicts the value at the configured horizon.
    pub fn predict_next_period(&self, series: &[f64]) -> f64 {
        predict_next_period(series, self.config.forecast.periods_ahead)
    }

    pub fn detect_seasonality(&self, history: &[TimeSeriesPoint]) -> Seasonality {
        detect_seasonality_with(history, &self.config.forecast)
    }

    pub fn calculate_confidence(&self, series: &[f64]) -> f64 {
        calculate_confidence_with(series, &self.config.forecast)
    }

    pub fn generate_insights(
        &self,
        stats: &StatsSnapshot,
        history: &[TimeSeriesPoint],
    ) -> Vec<Insight> {
        generate_insights_with(
            stats,
            history,
            &self.config.insights,
            self.config.forecast.trend_stable_band,
        )
    }

    pub fn generate_predictions(
        &self,
        stats: &StatsSnapshot,
        history: &[TimeSeriesPoint],
    ) -> Vec<Prediction> {
        generate_predictions_with(stats, history, &self.config.forecast)
    }

    pub fn generate_benchmarks(&self, stats: &StatsSnapshot) -> Vec<Benchmark> {
        generate_benchmarks_with(stats, &self.config.benchmarks)
    }

    /// The main entry point: runs every calculator over the same inputs.
    ///
    /// # Arguments
    ///
    /// * `stats` - Aggregate figures for the tenant.
    /// * `history` - Periodic samples, oldest first.
    pub fn analyze(&self, stats: &StatsSnapshot, history: &[TimeSeriesPoint]) -> AnalyticsReport {
        let report = AnalyticsReport {
            history_len: history.len(),
            predictions: self.generate_predictions(stats, history),
            insights: self.generate_insights(stats, history),
            benchmarks: self.generate_benchmarks(stats),
            seasonality: self.detect_seasonality(history),
        };

        tracing::debug!(
            periods = report.history_len,
            predictions = report.predictions.len(),
            insights = report.insights.len(),
            benchmarks = report.benchmarks.len(),
            "Analytics report computed."
        );
        report
    }
}
