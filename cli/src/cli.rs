//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Value a European option on a share with the Black-Scholes model.
///
/// Market data is taken as given; nothing is fetched.
#[derive(Parser, Debug)]
#[command(name = "share-option")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol of the underlying share
    #[arg(short, long)]
    pub ticker: String,

    /// Last close price of the share
    #[arg(short, long)]
    pub price: f64,

    /// Volatility of the share's returns (annualized unless --daily-volatility)
    #[arg(short, long, default_value = "0.2")]
    pub volatility: f64,

    /// Treat --volatility as a daily figure and annualize it
    #[arg(long)]
    pub daily_volatility: bool,

    /// Market capitalization
    #[arg(long, default_value = "0")]
    pub market_cap: f64,

    /// Dividend yield
    #[arg(long, default_value = "0")]
    pub dividend_yield: f64,

    /// Sector classification
    #[arg(long, default_value = "Unknown")]
    pub sector: String,

    /// Expiry date of the option (YYYY-MM-DD)
    #[arg(short, long)]
    pub expiry: String,

    /// Strike price of the option
    #[arg(short, long)]
    pub strike: f64,

    /// Option kind: call or put (case-insensitive)
    #[arg(short, long, default_value = "call")]
    pub kind: String,

    /// Risk-free rate, overriding the configuration
    #[arg(short, long)]
    pub risk_free_rate: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}
