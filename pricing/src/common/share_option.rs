//! European options written on a [`Share`].
//!
//! A [`ShareOption`] carries the share's market data by value, an expiry
//! date and the source of its risk-free rate. Valuation takes the
//! valuation instant as an argument, so the same option is worth less
//! the closer that instant is to expiry.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::analytic::black_scholes::{BlackScholesMerton, OptionPrice};
use crate::common::models::{DerivativeParameter, OptionKind};
use crate::common::share::{Share, DEFAULT_TRADING_DAYS};
use crate::error::{PricingError, PricingResult};
use crate::rates::{FlatRate, RateProvider};

pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

const DAYS_PER_YEAR: f64 = 365.0;

/// Exactly four digits, a dash, two digits, a dash, two digits.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[derive(Debug, Clone)]
pub struct ShareOption<R = FlatRate> {
    share: Share,
    expiry_date: NaiveDate,
    /// used to annualize a daily share volatility
    trading_days: u32,
    rates: R,
}

impl ShareOption<FlatRate> {
    /// Fails with [`PricingError::DateParse`] unless `expiry_date` is a `YYYY-MM-DD` date.
    pub fn new(share: Share, expiry_date: &str) -> PricingResult<Self> {
        // chrono alone accepts padding, signed years and unpadded fields
        if !is_iso_date_shape(expiry_date) {
            return Err(PricingError::DateParse {
                input: expiry_date.to_string(),
                source: None,
            });
        }
        let expiry = NaiveDate::parse_from_str(expiry_date, EXPIRY_FORMAT).map_err(|source| {
            PricingError::DateParse {
                input: expiry_date.to_string(),
                source: Some(source),
            }
        })?;
        Ok(Self::with_expiry(share, expiry))
    }

    pub fn with_expiry(share: Share, expiry_date: NaiveDate) -> Self {
        Self {
            share,
            expiry_date,
            trading_days: DEFAULT_TRADING_DAYS,
            rates: FlatRate::default(),
        }
    }
}

impl<R: RateProvider> ShareOption<R> {
    pub fn with_rate_provider<P: RateProvider>(self, rates: P) -> ShareOption<P> {
        ShareOption {
            share: self.share,
            expiry_date: self.expiry_date,
            trading_days: self.trading_days,
            rates,
        }
    }

    pub fn with_trading_days(mut self, trading_days: u32) -> Self {
        self.trading_days = trading_days;
        self
    }

    pub fn share(&self) -> &Share {
        &self.share
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn trading_days(&self) -> u32 {
        self.trading_days
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.rates.risk_free_rate()
    }

    /// Whole days from `at` until the start of the expiry date, truncated.
    pub fn days_to_expiry(&self, at: NaiveDateTime) -> i64 {
        let expiry = self.expiry_date.and_time(NaiveTime::MIN);
        (expiry - at).num_days()
    }

    pub fn time_to_expiry(&self, at: NaiveDateTime) -> f64 {
        self.days_to_expiry(at) as f64 / DAYS_PER_YEAR
    }

    /// The Black-Scholes value of a European option with the given strike, valued at `at`.
    ///
    /// Fails when the option has no whole day left to expiry, when the share
    /// price or strike is not positive, or when the annualized volatility is
    /// zero, negative or not finite.
    pub fn value_option(
        &self,
        strike_price: f64,
        kind: OptionKind,
        at: NaiveDateTime,
    ) -> PricingResult<f64> {
        let days = self.days_to_expiry(at);
        if days <= 0 {
            return Err(PricingError::ExpiredOption {
                expiry: self.expiry_date,
                days,
            });
        }

        let params = DerivativeParameter::new(
            self.share.share_price(),
            strike_price,
            days as f64 / DAYS_PER_YEAR,
            self.risk_free_rate(),
            self.share.annualized_volatility(self.trading_days),
        );
        params.validate()?;

        Ok(BlackScholesMerton::price(&params, kind))
    }
}

impl<R> fmt::Display for ShareOption<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, expiry_date={}",
            self.share,
            self.expiry_date.format(EXPIRY_FORMAT)
        )
    }
}
