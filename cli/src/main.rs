//! Share option valuation from the command line.
//!
//! # Usage
//!
//! ```bash
//! share-option --ticker AAPL --price 150 --volatility 0.25 \
//!     --expiry 2026-06-19 --strike 155 --kind put
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use share_pricing::{FlatRate, OptionKind, Share, ShareOption, VolatilityBasis};

mod cli;
mod config;

use cli::Cli;
use config::PricerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PricerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PricerConfig::default(),
    };

    init_logging(&cli, &config);

    let report = run(&cli, &config, Local::now().naive_local())?;
    println!("{}", report);

    Ok(())
}

/// Logs go to stderr; stdout carries only the report.
fn init_logging(cli: &Cli, config: &PricerConfig) {
    let fallback = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Values the option described by `cli` at `at` and renders the report.
fn run(cli: &Cli, config: &PricerConfig, at: NaiveDateTime) -> Result<String> {
    let kind: OptionKind = cli.kind.parse()?;

    let basis = if cli.daily_volatility {
        VolatilityBasis::Daily
    } else {
        VolatilityBasis::Annual
    };
    let share = Share::new(
        cli.ticker.as_str(),
        cli.price,
        cli.volatility,
        cli.market_cap,
        cli.dividend_yield,
        cli.sector.as_str(),
    )
    .with_volatility_basis(basis);

    let rate = cli.risk_free_rate.unwrap_or(config.pricing.risk_free_rate);
    let option = ShareOption::new(share, &cli.expiry)?
        .with_trading_days(config.pricing.trading_days)
        .with_rate_provider(FlatRate(rate));

    info!(ticker = %cli.ticker, %kind, strike = cli.strike, expiry = %option.expiry_date(), "valuing option");
    debug!(
        days_to_expiry = option.days_to_expiry(at),
        risk_free_rate = option.risk_free_rate(),
        volatility = option.share().annualized_volatility(option.trading_days()),
        "pricing inputs"
    );

    let value = option
        .value_option(cli.strike, kind, at)
        .with_context(|| format!("valuing {} {} option", cli.ticker, kind))?;
    info!(value, "option valued");

    Ok(format!(
        "{}\n{}\nThe {} option value is: {:.2}",
        option.share(),
        option,
        kind,
        value
    ))
}
