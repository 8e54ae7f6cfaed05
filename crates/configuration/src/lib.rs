use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    AnalyticsConfig, BenchmarkDefinition, BenchmarkMetric, ForecastSettings, InsightThresholds,
    MetricDirection, OutputFormat, OutputSettings,
};

/// Prefix for environment overrides, e.g. `CLINIC_ANALYTICS_FORECAST__PERIODS_AHEAD=2`.
pub const ENV_PREFIX: &str = "CLINIC_ANALYTICS";

/// Loads the analytics configuration from `path` plus environment overrides.
///
/// The file is optional: when it does not exist the built-in thresholds are
/// used. The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<AnalyticsConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults.");
    }

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<AnalyticsConfig>()?;
    config.validate()?;

    tracing::debug!(?config, "Analytics configuration loaded.");
    Ok(config)
}

/// Parses a configuration from TOML text, without consulting the environment.
pub fn parse_config(toml: &str) -> Result<AnalyticsConfig, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<AnalyticsConfig>()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_reference_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.forecast.periods_ahead, 1);
        assert_eq!(config.insights.closing_stage, "closing");
        assert_eq!(config.benchmarks.len(), 2);
        assert_eq!(config.benchmarks[0].target, 25.0);
        assert_eq!(config.benchmarks[1].direction, MetricDirection::LowerIsBetter);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = parse_config(
            r#"
            [forecast]
            periods_ahead = 3

            [insights]
            slow_pipeline_days = 90.0
            "#,
        )
        .unwrap();
        assert_eq!(config.forecast.periods_ahead, 3);
        assert_eq!(config.forecast.min_history, 3);
        assert_eq!(config.insights.slow_pipeline_days, 90.0);
        assert_eq!(config.insights.high_conversion_rate, 30.0);
    }

    #[test]
    fn benchmark_table_can_be_replaced() {
        let config = parse_config(
            r#"
            [[benchmarks]]
            metric = "conversion_rate"
            label = "Conversion"
            target = 20.0
            direction = "higher_is_better"
            tolerance = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.benchmarks.len(), 1);
        assert_eq!(config.benchmarks[0].metric, BenchmarkMetric::ConversionRate);
        assert_eq!(config.benchmarks[0].tolerance, 1.5);
    }

    #[test]
    fn inverted_conversion_thresholds_are_rejected() {
        let err = parse_config(
            r#"
            [insights]
            low_conversion_rate = 40.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let err = parse_config("[forecast]\nperiods_ahead = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("periods_ahead")));
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let err = parse_config("[forecast\n").unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("definitely-not-here.toml")).unwrap();
        assert_eq!(config.insights, InsightThresholds::default());
    }
}
