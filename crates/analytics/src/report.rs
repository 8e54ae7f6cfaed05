use crate::seasonality::Seasonality;
use core_types::{Benchmark, Insight, Prediction, Priority};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs from one engine run.
///
/// This struct is the output of `AnalyticsEngine::analyze` and serves as the
/// data transfer object handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Number of historical periods the report was computed from.
    pub history_len: usize,
    /// Empty when the history is too short to forecast.
    pub predictions: Vec<Prediction>,
    /// Already ranked, most important first.
    pub insights: Vec<Insight>,
    pub benchmarks: Vec<Benchmark>,
    pub seasonality: Seasonality,
}

impl AnalyticsReport {
    /// Insights that should be acted on first.
    pub fn urgent_insights(&self) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(|i| i.priority == Priority::High)
    }
}
