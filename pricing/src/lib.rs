//! Valuation of shares and European share options.
//!
//! A [`Share`] holds externally supplied market data. A [`ShareOption`] adds an
//! expiry date and values calls and puts with the Black-Scholes formula at an
//! explicit valuation instant:
//!
//! ```
//! use chrono::NaiveDate;
//! use share_pricing::{OptionKind, Share, ShareOption};
//!
//! let share = Share::new("AAPL", 150.0, 0.25, 2.5e12, 0.005, "Technology");
//! let option = ShareOption::new(share, "2026-07-01").unwrap();
//! let at = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let call = option.value_option(155.0, OptionKind::Call, at).unwrap();
//! assert!(call > 0.0);
//! ```

pub mod analytic;
pub mod common;
pub mod error;
pub mod rates;

pub use common::{OptionKind, Share, ShareOption, VolatilityBasis};
pub use error::{PricingError, PricingResult};
pub use rates::{FlatRate, RateProvider};
