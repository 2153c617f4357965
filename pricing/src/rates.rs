//! Sources of the risk-free rate used for discounting.
//!
//! A yield-curve provider plugs in here by implementing [`RateProvider`];
//! the pricing formula only sees the returned rate.

/// Continuously compounded, annualized risk-free rate.
pub trait RateProvider {
    fn risk_free_rate(&self) -> f64;
}

/// A constant rate, 3% unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRate(pub f64);

pub const DEFAULT_RISK_FREE_RATE: f64 = 0.03;

impl Default for FlatRate {
    fn default() -> Self {
        FlatRate(DEFAULT_RISK_FREE_RATE)
    }
}

impl RateProvider for FlatRate {
    fn risk_free_rate(&self) -> f64 {
        self.0
    }
}

impl<R: RateProvider + ?Sized> RateProvider for &R {
    fn risk_free_rate(&self) -> f64 {
        (**self).risk_free_rate()
    }
}

impl<R: RateProvider + ?Sized> RateProvider for Box<R> {
    fn risk_free_rate(&self) -> f64 {
        (**self).risk_free_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Curve {
        rates: Vec<f64>,
    }

    impl RateProvider for Curve {
        fn risk_free_rate(&self) -> f64 {
            self.rates.iter().sum::<f64>() / self.rates.len() as f64
        }
    }

    #[test]
    fn flat_rate_default() {
        assert_eq!(FlatRate::default().risk_free_rate(), 0.03);
        assert_eq!(FlatRate(0.05).risk_free_rate(), 0.05);
    }

    fn rate_of<R: RateProvider>(provider: R) -> f64 {
        provider.risk_free_rate()
    }

    #[test]
    fn providers_behind_references_and_boxes() {
        let curve = Curve {
            rates: vec![0.025, 0.035],
        };
        assert!((rate_of(&curve) - 0.03).abs() < 1e-12);

        let boxed: Box<dyn RateProvider> = Box::new(FlatRate(0.01));
        assert_eq!(rate_of(boxed), 0.01);
    }
}
