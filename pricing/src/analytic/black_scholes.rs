use crate::common::models::{DerivativeParameter, OptionKind};
use probability::distribution::{Distribution, Gaussian};

/// The standard normal cumulative distribution function Φ.
pub fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    fn price(params: &Self::Params, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => Self::call(params),
            OptionKind::Put => Self::put(params),
        }
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// The inputs are not checked; see [`DerivativeParameter::validate`].
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// The standardized decision variables `(d1, d2)`.
    pub fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }

    fn discounted_strike(dp: &DerivativeParameter) -> f64 {
        dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        cdf(d1) * dp.asset_price - cdf(d2) * Self::discounted_strike(dp)
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        cdf(-d2) * Self::discounted_strike(dp) - cdf(-d1) * dp.asset_price
    }
}
