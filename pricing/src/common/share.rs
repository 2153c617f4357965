use std::fmt;

/// Trading days per year used to scale a daily volatility.
pub const DEFAULT_TRADING_DAYS: u32 = 252;

/// Horizon over which the stored volatility of a [`Share`] is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolatilityBasis {
    /// Standard deviation of daily returns.
    Daily,
    /// Annualized standard deviation of returns, the σ of Black-Scholes.
    #[default]
    Annual,
}

/// A tradable equity at a point in time.
///
/// The market data is supplied by the caller and stored as given; nothing is
/// validated here. Pricing rejects degenerate prices and volatilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    ticker: String,
    /// last share price, in currency units
    share_price: f64,
    /// standard deviation of returns over `volatility_basis`
    volatility: f64,
    market_cap: f64,
    dividend_yield: f64,
    sector: String,
    volatility_basis: VolatilityBasis,
}

impl Share {
    pub fn new(
        ticker: impl Into<String>,
        share_price: f64,
        volatility: f64,
        market_cap: f64,
        dividend_yield: f64,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            share_price,
            volatility,
            market_cap,
            dividend_yield,
            sector: sector.into(),
            volatility_basis: VolatilityBasis::default(),
        }
    }

    pub fn with_volatility_basis(mut self, basis: VolatilityBasis) -> Self {
        self.volatility_basis = basis;
        self
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn share_price(&self) -> f64 {
        self.share_price
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn market_cap(&self) -> f64 {
        self.market_cap
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn volatility_basis(&self) -> VolatilityBasis {
        self.volatility_basis
    }

    /// The annualized volatility by the square-root-of-time rule.
    /// A daily figure is scaled by `sqrt(trading_days)`, an annual one is returned as is.
    pub fn annualized_volatility(&self, trading_days: u32) -> f64 {
        match self.volatility_basis {
            VolatilityBasis::Daily => self.volatility * f64::from(trading_days).sqrt(),
            VolatilityBasis::Annual => self.volatility,
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Share(ticker={}, share_price={:?}, volatility={:?}, market_cap={:?}, dividend_yield={:?}, sector={})",
            self.ticker,
            self.share_price,
            self.volatility,
            self.market_cap,
            self.dividend_yield,
            self.sector
        )
    }
}
