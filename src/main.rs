use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kaching::KachingError;
use kaching::analysis::{DateRange, analyze, analyze_range};
use kaching::config::fetch_config;
use kaching::models::{AnalysisReport, MarketChart};

/// Daily market statistics from a market chart JSON document.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Market chart JSON with `prices` and `total_volumes` arrays.
    #[arg(long)]
    input: PathBuf,

    /// First day of the analysed range (format: YYYY-MM-DD).
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day of the analysed range (format: YYYY-MM-DD).
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Currency label for the volume result (overrides `KACHING_CURRENCY`).
    #[arg(long)]
    currency: Option<String>,

    /// Coin label for the report (overrides `KACHING_COIN`).
    #[arg(long)]
    coin: Option<String>,

    /// Print the report on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Analysis could not run");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Runs the analysis and prints the report. Returns whether it succeeded.
fn run(cli: Cli) -> Result<bool, KachingError> {
    let market = fetch_config()?
        .market
        .with_overrides(cli.currency, cli.coin)?;

    let chart = MarketChart::load(&cli.input)?;
    info!(
        input = %cli.input.display(),
        prices = chart.prices.len(),
        volumes = chart.total_volumes.len(),
        "Loaded market chart"
    );

    let result = match (cli.from, cli.to) {
        (Some(from), Some(to)) => DateRange::new(
            from.and_time(chrono::NaiveTime::MIN).and_utc(),
            to.and_time(chrono::NaiveTime::MIN).and_utc(),
        )
        .and_then(|range| analyze_range(&range, &chart.prices, &chart.total_volumes)),
        _ => analyze(&chart.prices, &chart.total_volumes),
    }
    .map(|analysis| analysis.with_currency(&market.currency));

    let report = AnalysisReport::new(&result).with_coin(market.coin);
    println!("{}", report.to_json(!cli.compact)?);

    Ok(report.success)
}
