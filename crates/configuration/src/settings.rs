use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the analytics engine.
///
/// Every section falls back to its `Default`, so an empty file (or no file at
/// all) reproduces the reference thresholds exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub insights: InsightThresholds,
    #[serde(default = "default_benchmarks")]
    pub benchmarks: Vec<BenchmarkDefinition>,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Parameters for the trend, forecast, confidence and seasonality calculators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// How many periods past the last sample to project.
    pub periods_ahead: u32,
    /// Minimum history length before any prediction is produced.
    pub min_history: usize,
    /// Slopes within +/- this band are classified as stable.
    pub trend_stable_band: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    /// Confidence added per sample, capped at `max_confidence_bonus`.
    pub confidence_bonus_per_point: f64,
    pub max_confidence_bonus: f64,
    /// Series shorter than this get the flat minimum confidence.
    pub min_confidence_points: usize,
    /// Coefficient of variation above which leads are considered seasonal.
    pub seasonality_threshold: f64,
    pub high_variation_threshold: f64,
    pub min_seasonality_points: usize,
}

/// Trigger thresholds for the insight rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Conversion rate (percent) above which conversion is celebrated.
    pub high_conversion_rate: f64,
    /// Conversion rate (percent) below which lead qualification is flagged.
    pub low_conversion_rate: f64,
    /// Average days in pipeline above which the pipeline is considered slow.
    pub slow_pipeline_days: f64,
    /// Funnel stage whose share of the funnel marks a hot funnel.
    pub closing_stage: String,
    /// Share of a funnel's leads in `closing_stage` that marks an opportunity.
    pub funnel_closing_rate: f64,
    /// Number of most recent periods checked for a lead decline.
    pub lead_decline_window: usize,
    /// Minimum downward slope (leads per period) reported as a decline.
    pub lead_decline_slope: f64,
}

/// Which snapshot figure a benchmark compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkMetric {
    ConversionRate,
    AvgPipelineTime,
}

/// Whether a larger value is an improvement for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// One row of the industry-benchmark table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkDefinition {
    pub metric: BenchmarkMetric,
    /// Name shown on the dashboard.
    pub label: String,
    pub target: f64,
    pub direction: MetricDirection,
    /// Distance from `target` still reported as on target. Zero disables it.
    #[serde(default)]
    pub tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

// --- Default Implementations ---
// These carry the reference constants, so a user can omit any section from
// their toml and still get the standard behavior.

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            forecast: ForecastSettings::default(),
            insights: InsightThresholds::default(),
            benchmarks: default_benchmarks(),
            output: OutputSettings::default(),
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            periods_ahead: 1,
            min_history: 3,
            trend_stable_band: 0.1,
            min_confidence: 0.3,
            max_confidence: 0.95,
            confidence_bonus_per_point: 0.05,
            max_confidence_bonus: 0.2,
            min_confidence_points: 3,
            seasonality_threshold: 0.2,
            high_variation_threshold: 0.3,
            min_seasonality_points: 4,
        }
    }
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            high_conversion_rate: 30.0,
            low_conversion_rate: 15.0,
            slow_pipeline_days: 60.0,
            closing_stage: "closing".to_string(),
            funnel_closing_rate: 0.4,
            lead_decline_window: 3,
            lead_decline_slope: 2.0,
        }
    }
}

fn default_benchmarks() -> Vec<BenchmarkDefinition> {
    vec![
        BenchmarkDefinition {
            metric: BenchmarkMetric::ConversionRate,
            label: "Taxa de Conversão".to_string(),
            target: 25.0,
            direction: MetricDirection::HigherIsBetter,
            tolerance: 0.0,
        },
        BenchmarkDefinition {
            metric: BenchmarkMetric::AvgPipelineTime,
            label: "Tempo no Pipeline".to_string(),
            target: 45.0,
            direction: MetricDirection::LowerIsBetter,
            tolerance: 0.0,
        },
    ]
}

impl AnalyticsConfig {
    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.forecast;
        if f.periods_ahead == 0 {
            return invalid("forecast.periods_ahead must be at least 1");
        }
        if f.min_history == 0 {
            return invalid("forecast.min_history must be at least 1");
        }
        if f.trend_stable_band < 0.0 {
            return invalid("forecast.trend_stable_band must not be negative");
        }
        if !(0.0..=1.0).contains(&f.min_confidence)
            || !(0.0..=1.0).contains(&f.max_confidence)
            || f.min_confidence > f.max_confidence
        {
            return invalid("forecast confidence bounds must satisfy 0 <= min <= max <= 1");
        }
        if f.confidence_bonus_per_point < 0.0 || f.max_confidence_bonus < 0.0 {
            return invalid("forecast confidence bonuses must not be negative");
        }
        if f.seasonality_threshold > f.high_variation_threshold {
            return invalid(
                "forecast.seasonality_threshold must not exceed forecast.high_variation_threshold",
            );
        }
        if f.min_seasonality_points < 2 {
            return invalid("forecast.min_seasonality_points must be at least 2");
        }

        let i = &self.insights;
        if i.low_conversion_rate >= i.high_conversion_rate {
            return invalid(
                "insights.low_conversion_rate must be below insights.high_conversion_rate",
            );
        }
        if i.closing_stage.trim().is_empty() {
            return invalid("insights.closing_stage must not be empty");
        }
        if i.lead_decline_window < 2 {
            return invalid("insights.lead_decline_window must be at least 2");
        }

        for b in &self.benchmarks {
            if b.tolerance < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "benchmark '{}' has a negative tolerance",
                    b.label
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> Result<(), ConfigError> {
    Err(ConfigError::ValidationError(message.to_string()))
}
