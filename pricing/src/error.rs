use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("invalid expiry date '{input}', expected YYYY-MM-DD")]
    DateParse {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("invalid option kind '{0}', use 'call' or 'put'")]
    InvalidOptionKind(String),
    #[error("option expired on {expiry} ({days} days to expiry)")]
    ExpiredOption { expiry: NaiveDate, days: i64 },
    #[error("volatility is zero")]
    ZeroVolatility,
    #[error("invalid volatility {0}")]
    InvalidVolatility(f64),
    #[error("invalid risk-free rate {0}")]
    InvalidRate(f64),
    #[error("share price {spot} and strike {strike} must be positive")]
    InvalidPrice { spot: f64, strike: f64 },
}

pub type PricingResult<T> = Result<T, PricingError>;
