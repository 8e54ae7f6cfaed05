pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BenchmarkStatus, InsightType, Metric, Priority, SeasonalityPattern, TrendDirection};
pub use error::CoreError;
pub use structs::{
    metric_series, Benchmark, FunnelStats, Insight, Prediction, StageStats, StatsSnapshot,
    TimeSeriesPoint,
};
