//! # Clinic Insights Analytics Engine
//!
//! This crate turns the aggregate figures of a clinic-services CRM into short-term
//! forecasts, ranked recommendations and benchmark comparisons for the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of databases,
//!   HTTP or rendering. It depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** Every calculator is a pure function of its inputs.
//!   The `AnalyticsEngine` only carries its immutable thresholds, so identical
//!   inputs always produce identical outputs.
//! - **Graceful Degradation:** Short or degenerate histories fall back to documented
//!   defaults (no predictions, a stable trend, minimum confidence) instead of errors.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The configured facade over all calculators.
//! - The free functions (`calculate_trend`, `predict_next_period`, ...), which use
//!   the reference thresholds.
//! - `AnalyticsReport`: The bundle returned by `AnalyticsEngine::analyze`.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod benchmarks;
pub mod confidence;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod predictions;
pub mod report;
pub mod seasonality;
pub mod stats;
pub mod trend;

// Re-export the key components to create a clean, public-facing API.
pub use benchmarks::generate_benchmarks;
pub use confidence::calculate_confidence;
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use forecast::{predict_next_period, DEFAULT_PERIODS_AHEAD};
pub use insights::generate_insights;
pub use predictions::generate_predictions;
pub use report::AnalyticsReport;
pub use seasonality::{detect_seasonality, Seasonality};
pub use trend::{calculate_trend, Trend};
