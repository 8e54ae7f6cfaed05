use analytics::{AnalyticsEngine, AnalyticsReport};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use configuration::{load_config, OutputFormat};
use core_types::{StatsSnapshot, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;

/// The main entry point for the clinic analytics command-line tool.
fn main() -> Result<()> {
    // Load CLINIC_ANALYTICS_* overrides and RUST_LOG from a .env file, if any.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.log_dir.as_deref());

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    let format = cli.format.unwrap_or(config.output.format);
    let engine = AnalyticsEngine::with_config(config)?;

    let args = cli.command.input();
    let input = read_input(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        periods = input.history.len(),
        funnels = input.stats.funnel_stats.len(),
        "Input loaded."
    );

    let output = match cli.command {
        Commands::Analyze(_) => {
            let report = engine.analyze(&input.stats, &input.history);
            render_report(report, format)?
        }
        Commands::Predict(_) => {
            let predictions = engine.generate_predictions(&input.stats, &input.history);
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&predictions)?,
                OutputFormat::Table if predictions.is_empty() => {
                    "Not enough history to forecast.".to_string()
                }
                OutputFormat::Table => render::predictions_table(&predictions).to_string(),
            }
        }
        Commands::Insights(_) => {
            let insights = engine.generate_insights(&input.stats, &input.history);
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&insights)?,
                OutputFormat::Table => render::insights_table(&insights).to_string(),
            }
        }
        Commands::Benchmarks(_) => {
            let benchmarks = engine.generate_benchmarks(&input.stats);
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&benchmarks)?,
                OutputFormat::Table => render::benchmarks_table(&benchmarks).to_string(),
            }
        }
    };

    println!("{}", output);
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Forecasts and recommendations for a clinic-services CRM.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the analytics configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = "analytics.toml")]
    config: PathBuf,

    /// Output format. Overrides `output.format` from the configuration.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Also write logs to a daily rolling file in this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every calculator and print the combined report.
    Analyze(InputArgs),
    /// Forecast leads, conversions and revenue for the next period.
    Predict(InputArgs),
    /// List ranked recommendations for the snapshot.
    Insights(InputArgs),
    /// Compare the snapshot against the industry benchmarks.
    Benchmarks(InputArgs),
}

impl Commands {
    fn input(&self) -> &InputArgs {
        match self {
            Commands::Analyze(args)
            | Commands::Predict(args)
            | Commands::Insights(args)
            | Commands::Benchmarks(args) => args,
        }
    }
}

#[derive(Parser)]
struct InputArgs {
    /// JSON document with `stats` and `history`. Use `-` to read from stdin.
    #[arg(long, short)]
    input: PathBuf,
}

// ==============================================================================
// Input & Output
// ==============================================================================

/// The document exported by the CRM's data layer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyticsInput {
    stats: StatsSnapshot,
    history: Vec<TimeSeriesPoint>,
}

/// The report as written to stdout in JSON mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedReport {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: AnalyticsReport,
}

fn read_input(path: &Path) -> Result<AnalyticsInput> {
    read_input_from(path, std::io::stdin().lock())
}

/// Reads the document from `path`, or from `stdin` when the path is `-`.
fn read_input_from(path: &Path, mut stdin: impl Read) -> Result<AnalyticsInput> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    parse_input(&raw)
}

fn parse_input(raw: &str) -> Result<AnalyticsInput> {
    let input: AnalyticsInput =
        serde_json::from_str(raw).context("Input is not a valid analytics document")?;
    for point in &input.history {
        point.validate()?;
    }
    Ok(input)
}

fn render_report(report: AnalyticsReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&GeneratedReport {
            generated_at: Utc::now(),
            report,
        })?,
        OutputFormat::Table => render::report_text(&report),
    })
}

/// Console logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "clinic-insights.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            None
        }
    }
}
