use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, PricingResult};

pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Rejects inputs for which d1 is undefined: `ln(S/K)` needs positive prices
    /// and the `σ√T` denominator needs positive volatility. A non-finite
    /// rate would carry through the discount factor as NaN.
    /// Expiry is checked by the caller, which knows the expiry date.
    pub fn validate(&self) -> PricingResult<()> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(self.asset_price) || !positive(self.strike) {
            return Err(PricingError::InvalidPrice {
                spot: self.asset_price,
                strike: self.strike,
            });
        }
        if self.vola == 0.0 {
            return Err(PricingError::ZeroVolatility);
        }
        if !positive(self.vola) {
            return Err(PricingError::InvalidVolatility(self.vola));
        }
        if !self.rfr.is_finite() {
            return Err(PricingError::InvalidRate(self.rfr));
        }
        Ok(())
    }
}

/// Option type (call or put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}
