use analytics::{AnalyticsReport, Seasonality};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use core_types::{Benchmark, Insight, Prediction};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(Cell::new));
    table
}

pub fn predictions_table(predictions: &[Prediction]) -> Table {
    let mut t = table(&["Metric", "Current", "Predicted", "Confidence", "Trend", "Reasoning"]);
    for p in predictions {
        t.add_row(vec![
            Cell::new(&p.metric),
            Cell::new(format!("{:.2}", p.current_value)),
            Cell::new(format!("{:.0}", p.predicted_value)),
            Cell::new(format!("{:.0}%", p.confidence * 100.0)),
            Cell::new(p.trend),
            Cell::new(&p.reasoning),
        ]);
    }
    t
}

pub fn insights_table(insights: &[Insight]) -> Table {
    let mut t = table(&["Priority", "Impact", "Type", "Title", "Description", "Action"]);
    for i in insights {
        t.add_row(vec![
            Cell::new(i.priority),
            Cell::new(i.impact),
            Cell::new(i.kind),
            Cell::new(&i.title),
            Cell::new(&i.description),
            Cell::new(&i.action),
        ]);
    }
    t
}

pub fn benchmarks_table(benchmarks: &[Benchmark]) -> Table {
    let mut t = table(&["Metric", "Current", "Benchmark", "Status"]);
    for b in benchmarks {
        t.add_row(vec![
            Cell::new(&b.metric),
            Cell::new(format!("{:.1}", b.current)),
            Cell::new(format!("{:.1}", b.benchmark)),
            Cell::new(b.status),
        ]);
    }
    t
}

pub fn seasonality_line(seasonality: &Seasonality) -> String {
    format!(
        "Seasonality: {} (pattern {}, coefficient of variation {:.2})",
        if seasonality.has_seasonality { "yes" } else { "no" },
        seasonality.pattern,
        seasonality.coefficient_of_variation
    )
}

/// Renders the whole report as consecutive titled sections.
pub fn report_text(report: &AnalyticsReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Periods analysed: {}\n\n", report.history_len));

    out.push_str("Predictions\n");
    if report.predictions.is_empty() {
        out.push_str("  not enough history to forecast\n");
    } else {
        out.push_str(&format!("{}\n", predictions_table(&report.predictions)));
    }

    out.push_str("\nInsights\n");
    if report.insights.is_empty() {
        out.push_str("  nothing to report\n");
    } else {
        out.push_str(&format!("{}\n", insights_table(&report.insights)));
    }

    out.push_str("\nBenchmarks\n");
    out.push_str(&format!("{}\n", benchmarks_table(&report.benchmarks)));

    out.push('\n');
    out.push_str(&seasonality_line(&report.seasonality));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{StatsSnapshot, TimeSeriesPoint};

    fn history() -> Vec<TimeSeriesPoint> {
        serde_json::from_str(
            r#"[
                {"period": "jan", "leads": 10, "conversions": 2, "revenue": 1000},
                {"period": "fev", "leads": 12, "conversions": 3, "revenue": 1500},
                {"period": "mar", "leads": 15, "conversions": 4, "revenue": 2100}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn report_text_lists_every_section() {
        let stats = StatsSnapshot {
            conversion_rate: 35.0,
            avg_pipeline_time: 30.0,
            ..Default::default()
        };
        let report = AnalyticsEngine::new().analyze(&stats, &history());
        let text = report_text(&report);

        assert!(text.contains("Periods analysed: 3"));
        assert!(text.contains("Conversões"));
        assert!(text.contains("Excelente taxa de conversão"));
        assert!(text.contains("Tempo no Pipeline"));
        assert!(text.contains("pattern insufficient_data"));
    }

    #[test]
    fn short_history_explains_missing_predictions() {
        let report = AnalyticsEngine::new().analyze(&StatsSnapshot::default(), &history()[..2]);
        assert!(report_text(&report).contains("not enough history to forecast"));
    }
}
