//! Print the analyzed scenario table to stdout.

use clap::Parser;
use dotenvy::dotenv;
use regime_analyzer::catalog::{self, AnalyzedScenario, ScenarioQuery, SortKey};
use regime_analyzer::logging;
use regime_analyzer::models::{Bias, BiasStrength};
use regime_analyzer::report::ScenarioReport;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Volume-rising scenario explorer", long_about = None)]
struct Cli {
    /// Only show this bias (bullish, bearish, neutral)
    #[arg(long)]
    bias: Option<Bias>,

    /// Only show this strength tier (e.g. "very strong", moderate)
    #[arg(long)]
    strength: Option<BiasStrength>,

    /// Sort key: score, bullish, bearish or id
    #[arg(long, default_value = "score")]
    sort: SortKey,

    /// Maximum number of rows to print
    #[arg(long)]
    limit: Option<usize>,

    /// Print signals, warnings and conflicts under each row
    #[arg(long, default_value_t = false)]
    details: bool,

    /// Print aggregate counts before the table
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Emit JSON instead of a text table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = Cli::parse();
    debug!(?args, "Parsed arguments");

    let catalog = catalog::global();
    let mut query = ScenarioQuery::default().sorted_by(args.sort);
    query.bias = args.bias;
    query.strength = args.strength;

    let mut rows = catalog.query(&query);
    let matched = rows.len();
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.json {
        let reports: Vec<ScenarioReport> = rows.into_iter().map(ScenarioReport::from).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if args.stats {
        let stats = catalog.stats();
        println!(
            "Total: {}  Bullish: {}  Bearish: {}  Neutral: {}  Tradeable: {}  Conflicts: {}",
            stats.total, stats.bullish, stats.bearish, stats.neutral, stats.tradeable, stats.conflicted
        );
        println!();
    }

    println!("Showing {} of {} scenarios", matched, catalog.len());
    for entry in rows {
        print_row(entry, args.details);
    }

    Ok(())
}

fn print_row(entry: &AnalyzedScenario, details: bool) {
    let report = ScenarioReport::from(entry);
    println!(
        "#{:<4} {:<8} {:<12} {:<15} bull {:>2} / bear {:>2}  {} | {} | {} | {} | {}",
        report.id,
        report.bias,
        report.bias_strength,
        report.trade_action,
        report.bullish_score,
        report.bearish_score,
        report.labels.band1,
        report.labels.band2,
        report.labels.trend,
        report.labels.containment,
        report.labels.price_position,
    );

    if !details {
        return;
    }
    println!("      Entry: {}", report.entry_type);
    for signal in &report.signals {
        println!("      + {}", signal);
    }
    for warning in &report.warnings {
        println!("      ! {}", warning);
    }
    for conflict in &report.conflicts {
        println!("      x {}", conflict);
    }
}
