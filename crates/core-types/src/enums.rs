use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Warning,
    Opportunity,
    Info,
    Success,
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightType::Warning => write!(f, "warning"),
            InsightType::Opportunity => write!(f, "opportunity"),
            InsightType::Info => write!(f, "info"),
            InsightType::Success => write!(f, "success"),
        }
    }
}

/// How urgently an insight should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Multiplier applied to an insight's impact when ranking.
    pub fn weight(&self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Outcome of comparing a metric against its benchmark.
///
/// `Above` means "better than the benchmark", whichever numeric direction
/// that is for the metric in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Above,
    Below,
    OnTarget,
}

impl fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkStatus::Above => write!(f, "above"),
            BenchmarkStatus::Below => write!(f, "below"),
            BenchmarkStatus::OnTarget => write!(f, "on_target"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityPattern {
    InsufficientData,
    HighVariation,
    ModerateVariation,
}

impl fmt::Display for SeasonalityPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonalityPattern::InsufficientData => write!(f, "insufficient_data"),
            SeasonalityPattern::HighVariation => write!(f, "high_variation"),
            SeasonalityPattern::ModerateVariation => write!(f, "moderate_variation"),
        }
    }
}

/// The per-period metrics that are forecast, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Leads,
    Conversions,
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Leads, Metric::Conversions, Metric::Revenue];

    /// The name shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Leads => "Leads",
            Metric::Conversions => "Conversões",
            Metric::Revenue => "Receita",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_weights_rank_high_first() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn enums_serialize_as_snake_case() {
        assert_eq!(serde_json::to_string(&BenchmarkStatus::OnTarget).unwrap(), "\"on_target\"");
        assert_eq!(
            serde_json::to_string(&SeasonalityPattern::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
        assert_eq!(serde_json::to_string(&TrendDirection::Up).unwrap(), "\"up\"");
    }

    #[test]
    fn display_matches_serialized_form() {
        assert_eq!(SeasonalityPattern::HighVariation.to_string(), "high_variation");
        assert_eq!(InsightType::Opportunity.to_string(), "opportunity");
        assert_eq!(TrendDirection::Stable.to_string(), "stable");
    }

    #[test]
    fn metric_labels_follow_display_order() {
        let labels: Vec<_> = Metric::ALL.iter().map(Metric::label).collect();
        assert_eq!(labels, vec!["Leads", "Conversões", "Receita"]);
    }
}
