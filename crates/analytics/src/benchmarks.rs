use configuration::{AnalyticsConfig, BenchmarkDefinition, BenchmarkMetric, MetricDirection};
use core_types::{Benchmark, BenchmarkStatus, StatsSnapshot};

/// Compares the snapshot against the reference industry benchmarks:
/// conversion rate 25% (higher is better) and 45 days in pipeline (lower is better).
pub fn generate_benchmarks(stats: &StatsSnapshot) -> Vec<Benchmark> {
    generate_benchmarks_with(stats, &AnalyticsConfig::default().benchmarks)
}

/// Compares the snapshot against an arbitrary benchmark table, row by row.
pub fn generate_benchmarks_with(
    stats: &StatsSnapshot,
    definitions: &[BenchmarkDefinition],
) -> Vec<Benchmark> {
    definitions
        .iter()
        .map(|def| {
            let current = current_value(stats, def.metric);
            Benchmark {
                metric: def.label.clone(),
                current,
                benchmark: def.target,
                status: compare(current, def),
            }
        })
        .collect()
}

fn current_value(stats: &StatsSnapshot, metric: BenchmarkMetric) -> f64 {
    match metric {
        BenchmarkMetric::ConversionRate => stats.conversion_rate,
        BenchmarkMetric::AvgPipelineTime => stats.avg_pipeline_time,
    }
}

/// `Above` means better than the target in the metric's own direction.
fn compare(current: f64, def: &BenchmarkDefinition) -> BenchmarkStatus {
    if def.tolerance > 0.0 && (current - def.target).abs() <= def.tolerance {
        return BenchmarkStatus::OnTarget;
    }
    let better = match def.direction {
        MetricDirection::HigherIsBetter => current >= def.target,
        MetricDirection::LowerIsBetter => current <= def.target,
    };
    if better {
        BenchmarkStatus::Above
    } else {
        BenchmarkStatus::Below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(conversion_rate: f64, avg_pipeline_time: f64) -> StatsSnapshot {
        StatsSnapshot {
            conversion_rate,
            avg_pipeline_time,
            ..Default::default()
        }
    }

    #[test]
    fn good_figures_are_above_both_benchmarks() {
        let benchmarks = generate_benchmarks(&stats(30.0, 40.0));
        assert_eq!(benchmarks.len(), 2);
        assert_eq!(benchmarks[0].metric, "Taxa de Conversão");
        assert_eq!(benchmarks[0].status, BenchmarkStatus::Above);
        assert_eq!(benchmarks[0].benchmark, 25.0);
        assert_eq!(benchmarks[1].metric, "Tempo no Pipeline");
        assert_eq!(benchmarks[1].status, BenchmarkStatus::Above);
        assert_eq!(benchmarks[1].current, 40.0);
    }

    #[test]
    fn boundaries_count_as_meeting_the_benchmark() {
        let benchmarks = generate_benchmarks(&stats(25.0, 45.0));
        assert!(benchmarks.iter().all(|b| b.status == BenchmarkStatus::Above));
    }

    #[test]
    fn slow_pipeline_is_below_even_though_numerically_larger() {
        let benchmarks = generate_benchmarks(&stats(10.0, 80.0));
        assert_eq!(benchmarks[0].status, BenchmarkStatus::Below);
        assert_eq!(benchmarks[1].status, BenchmarkStatus::Below);
    }

    #[test]
    fn tolerance_reports_on_target() {
        let table = vec![BenchmarkDefinition {
            metric: BenchmarkMetric::ConversionRate,
            label: "Conversion".to_string(),
            target: 25.0,
            direction: MetricDirection::HigherIsBetter,
            tolerance: 2.0,
        }];
        let status = |rate| generate_benchmarks_with(&stats(rate, 0.0), &table)[0].status;
        assert_eq!(status(23.5), BenchmarkStatus::OnTarget);
        assert_eq!(status(22.0), BenchmarkStatus::Below);
        assert_eq!(status(28.0), BenchmarkStatus::Above);
    }
}
