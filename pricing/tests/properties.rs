//! Pricing properties checked over randomized market data.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use share_pricing::analytic::{BlackScholesMerton, OptionPrice};
use share_pricing::common::DerivativeParameter;
use share_pricing::{OptionKind, Share, ShareOption};

fn market() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        10.0..1000.0f64, // spot
        0.8..1.25f64,    // moneyness S/K
        60u32..730,      // days to expiry
        0.0..0.08f64,    // rate
        0.15..0.8f64,    // volatility
    )
        .prop_map(|(spot, moneyness, days, rate, vola)| {
            (spot, spot / moneyness, f64::from(days) / 365.0, rate, vola)
        })
}

proptest! {
    #[test]
    fn values_are_finite_and_non_negative((spot, strike, t, rate, vola) in market()) {
        let dp = DerivativeParameter::new(spot, strike, t, rate, vola);
        let call = BlackScholesMerton::call(&dp);
        let put = BlackScholesMerton::put(&dp);

        prop_assert!(call.is_finite() && put.is_finite());
        prop_assert!(call > -1e-9 && put > -1e-9);
    }

    #[test]
    fn put_call_parity((spot, strike, t, rate, vola) in market()) {
        let dp = DerivativeParameter::new(spot, strike, t, rate, vola);
        let lhs = BlackScholesMerton::call(&dp) - BlackScholesMerton::put(&dp);
        let rhs = spot - strike * (-rate * t).exp();

        prop_assert!((lhs - rhs).abs() <= 1e-6 * spot.max(strike));
    }

    #[test]
    fn monotone_in_spot((spot, strike, t, rate, vola) in market(), bump in 0.01..0.1f64) {
        let low = DerivativeParameter::new(spot, strike, t, rate, vola);
        let high = DerivativeParameter::new(spot * (1.0 + bump), strike, t, rate, vola);

        prop_assert!(BlackScholesMerton::call(&high) > BlackScholesMerton::call(&low));
        prop_assert!(BlackScholesMerton::put(&high) < BlackScholesMerton::put(&low));
    }

    #[test]
    fn share_option_matches_closed_form(
        (spot, strike, _, _, vola) in market(),
        days in 1i64..1500,
    ) {
        let expiry = NaiveDate::from_ymd_opt(2030, 3, 15).unwrap();
        let at = (expiry - Duration::days(days)).and_hms_opt(0, 0, 0).unwrap();

        let share = Share::new("XYZ", spot, vola, 1.0e9, 0.0, "Industrials");
        let option = ShareOption::with_expiry(share, expiry);
        let dp = DerivativeParameter::new(spot, strike, days as f64 / 365.0, 0.03, vola);

        for kind in [OptionKind::Call, OptionKind::Put] {
            let value = option.value_option(strike, kind, at).unwrap();
            prop_assert!((value - BlackScholesMerton::price(&dp, kind)).abs() < 1e-12);
        }
    }
}
