use crate::enums::{BenchmarkStatus, InsightType, Metric, Priority, TrendDirection};
use crate::error::CoreError;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One period of activity, as aggregated by the data layer.
///
/// Histories are ordered oldest first. The `period` label is opaque: no date
/// arithmetic is ever performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub leads: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: Decimal,
}

impl TimeSeriesPoint {
    /// Creates a new point, rejecting negative revenue.
    pub fn new(
        period: impl Into<String>,
        leads: u64,
        conversions: u64,
        revenue: Decimal,
    ) -> Result<Self, CoreError> {
        let point = Self {
            period: period.into(),
            leads,
            conversions,
            revenue,
        };
        point.validate()?;
        Ok(point)
    }

    /// Checks the invariants serde cannot enforce on deserialized points.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.revenue < Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                format!("revenue of period '{}'", self.period),
                format!("must not be negative, got {}", self.revenue),
            ));
        }
        Ok(())
    }

    /// Returns the value of `metric` for this period as a float.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Leads => self.leads as f64,
            Metric::Conversions => self.conversions as f64,
            // Revenue beyond f64 range is not a realistic clinic figure; saturate to 0.
            Metric::Revenue => self.revenue.to_f64().unwrap_or(0.0),
        }
    }
}

/// Reads an explicit `null` as the type's default.
///
/// SQL aggregates over no rows (`AVG`, `SUM`) come back as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extracts a single metric's series from a history, preserving order.
pub fn metric_series(history: &[TimeSeriesPoint], metric: Metric) -> Vec<f64> {
    history.iter().map(|p| p.value(metric)).collect()
}

/// Count and value of the leads sitting in one funnel stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stages: BTreeMap<String, StageStats>,
}

impl FunnelStats {
    /// Share of the funnel's leads that reached `stage`.
    ///
    /// Zero when the funnel is empty or the stage does not exist.
    pub fn stage_rate(&self, stage: &str) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.stages
            .get(stage)
            .map(|s| s.count as f64 / self.count as f64)
            .unwrap_or(0.0)
    }
}

/// Aggregate business figures for one tenant at one point in time.
///
/// Every field defaults to zero/empty when missing or `null`, so partially
/// populated payloads are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub total_leads: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_clients: u64,
    /// Percentage, 0-100.
    #[serde(deserialize_with = "null_as_default")]
    pub conversion_rate: f64,
    /// Days.
    #[serde(deserialize_with = "null_as_default")]
    pub avg_pipeline_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub clients_needing_reactivation: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub funnel_stats: BTreeMap<String, FunnelStats>,
    #[serde(deserialize_with = "null_as_default")]
    pub mrr: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub ltv: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub metric: String,
    pub current_value: f64,
    pub predicted_value: f64,
    pub confidence: f64,
    pub trend: TrendDirection,
    pub reasoning: String,
}

/// A prioritized, human-readable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    pub action: String,
    pub priority: Priority,
    /// 1-10.
    pub impact: u8,
}

impl Insight {
    /// Ranking score: priority weight times impact.
    pub fn score(&self) -> u32 {
        self.priority.weight() * u32::from(self.impact)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub metric: String,
    pub current: f64,
    pub benchmark: f64,
    pub status: BenchmarkStatus,
}
