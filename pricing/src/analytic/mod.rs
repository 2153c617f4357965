pub mod black_scholes;

pub use black_scholes::{cdf, BlackScholesMerton, OptionPrice};
