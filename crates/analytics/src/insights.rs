//! Rule-based recommendations over a business snapshot.
//!
//! Each rule is an independent check evaluated in a fixed order. Every rule
//! that matches contributes its insights, then the whole list is ranked by
//! priority weight times impact. Ranking is a stable sort, so insights with
//! equal scores keep the order in which their rules ran.

use crate::trend::{calculate_trend_with_band, DEFAULT_STABLE_BAND};
use configuration::InsightThresholds;
use core_types::{
    metric_series, Insight, InsightType, Metric, Priority, StatsSnapshot, TimeSeriesPoint,
    TrendDirection,
};

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub stats: &'a StatsSnapshot,
    pub history: &'a [TimeSeriesPoint],
    pub thresholds: &'a InsightThresholds,
    pub stable_band: f64,
}

/// A single insight rule. Returns the insights it produces, if any.
pub type Rule = fn(&RuleContext<'_>) -> Vec<Insight>;

/// The rule set, in evaluation order.
pub const RULES: &[(&str, Rule)] = &[
    ("reactivation", reactivation),
    ("conversion_rate", conversion_rate),
    ("pipeline_time", pipeline_time),
    ("funnel_closing", funnel_closing),
    ("lead_decline", lead_decline),
];

/// Scans `stats` and `history` with the reference thresholds.
pub fn generate_insights(stats: &StatsSnapshot, history: &[TimeSeriesPoint]) -> Vec<Insight> {
    generate_insights_with(
        stats,
        history,
        &InsightThresholds::default(),
        DEFAULT_STABLE_BAND,
    )
}

pub fn generate_insights_with(
    stats: &StatsSnapshot,
    history: &[TimeSeriesPoint],
    thresholds: &InsightThresholds,
    stable_band: f64,
) -> Vec<Insight> {
    let ctx = RuleContext {
        stats,
        history,
        thresholds,
        stable_band,
    };

    let mut insights = Vec::new();
    for (name, rule) in RULES {
        let produced = rule(&ctx);
        if !produced.is_empty() {
            tracing::debug!(rule = name, count = produced.len(), "Insight rule matched.");
        }
        insights.extend(produced);
    }

    rank(&mut insights);
    insights
}

/// Orders insights by descending score, keeping insertion order on ties.
pub fn rank(insights: &mut [Insight]) {
    insights.sort_by(|a, b| b.score().cmp(&a.score()));
}

fn insight(
    kind: InsightType,
    priority: Priority,
    impact: u8,
    title: String,
    description: String,
    action: String,
) -> Insight {
    Insight {
        kind,
        title,
        description,
        action,
        priority,
        impact,
    }
}

fn reactivation(ctx: &RuleContext<'_>) -> Vec<Insight> {
    let count = ctx.stats.clients_needing_reactivation;
    if count == 0 {
        return vec![];
    }
    vec![insight(
        InsightType::Warning,
        Priority::High,
        8,
        "Clientes precisando de reativação".to_string(),
        format!("{} clientes estão sem atividade recente e podem ser perdidos.", count),
        "Lançar uma campanha de reativação para esses clientes".to_string(),
    )]
}

fn conversion_rate(ctx: &RuleContext<'_>) -> Vec<Insight> {
    let rate = ctx.stats.conversion_rate;
    if rate > ctx.thresholds.high_conversion_rate {
        vec![insight(
            InsightType::Success,
            Priority::Medium,
            7,
            "Excelente taxa de conversão".to_string(),
            format!("A taxa de conversão de {:.1}% está acima da média do mercado.", rate),
            "Investir mais em captação de leads para aproveitar a boa conversão".to_string(),
        )]
    } else if rate < ctx.thresholds.low_conversion_rate {
        vec![insight(
            InsightType::Warning,
            Priority::High,
            9,
            "Taxa de conversão baixa".to_string(),
            format!("A taxa de conversão de {:.1}% está abaixo do esperado.", rate),
            "Revisar o processo de qualificação de leads".to_string(),
        )]
    } else {
        vec![]
    }
}

fn pipeline_time(ctx: &RuleContext<'_>) -> Vec<Insight> {
    let days = ctx.stats.avg_pipeline_time;
    if days <= ctx.thresholds.slow_pipeline_days {
        return vec![];
    }
    vec![insight(
        InsightType::Warning,
        Priority::Medium,
        6,
        "Pipeline lento".to_string(),
        format!("Os leads passam em média {:.0} dias no pipeline.", days),
        "Automatizar etapas do pipeline para acelerar o fechamento".to_string(),
    )]
}

fn funnel_closing(ctx: &RuleContext<'_>) -> Vec<Insight> {
    let stage = ctx.thresholds.closing_stage.as_str();
    ctx.stats
        .funnel_stats
        .iter()
        .filter_map(|(name, funnel)| {
            let rate = funnel.stage_rate(stage);
            (rate > ctx.thresholds.funnel_closing_rate).then(|| {
                insight(
                    InsightType::Opportunity,
                    Priority::Low,
                    5,
                    format!("Funil {} com alta taxa de fechamento", name),
                    format!(
                        "{:.0}% dos leads do funil {} já estão em fechamento.",
                        rate * 100.0,
                        name
                    ),
                    format!("Priorizar o acompanhamento dos fechamentos do funil {}", name),
                )
            })
        })
        .collect()
}

fn lead_decline(ctx: &RuleContext<'_>) -> Vec<Insight> {
    let window = ctx.thresholds.lead_decline_window;
    if ctx.history.len() < window {
        return vec![];
    }

    let recent = &ctx.history[ctx.history.len() - window..];
    let trend = calculate_trend_with_band(&metric_series(recent, Metric::Leads), ctx.stable_band);
    if trend.direction != TrendDirection::Down
        || trend.slope.abs() <= ctx.thresholds.lead_decline_slope
    {
        return vec![];
    }

    vec![insight(
        InsightType::Warning,
        Priority::High,
        8,
        "Queda no volume de leads".to_string(),
        format!(
            "Os leads caíram em média {:.1} por período nos últimos {} períodos.",
            trend.slope.abs(),
            window
        ),
        "Reforçar as campanhas de captação de leads".to_string(),
    )]
}
