//! # Effective Value
//!
//! Diminishing returns on a craft's balance. Up to the soft limit every unit
//! counts; above it only the soft limit counts, scaled by a power of how far
//! past the limit the balance is.
//!
//! ```text
//! balance <= limit:  value = balance
//! balance >  limit:  value = limit * (balance / limit) ^ exponent
//! ```

use serde::{Deserialize, Serialize};

/// Soft limit and diminishing exponent for one hepteract type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectiveCurve {
    /// Balance above which returns diminish.
    pub soft_limit: f64,
    /// Exponent applied to `balance / soft_limit` past the limit.
    pub exponent: f64,
}

impl EffectiveCurve {
    /// Creates a curve.
    #[must_use]
    pub const fn new(soft_limit: f64, exponent: f64) -> Self {
        Self {
            soft_limit,
            exponent,
        }
    }

    /// Applies the curve to a balance.
    #[inline]
    #[must_use]
    pub fn apply(&self, balance: f64) -> f64 {
        effective_value(balance, *self)
    }
}

/// Effective value of `balance` under `curve`.
#[must_use]
pub fn effective_value(balance: f64, curve: EffectiveCurve) -> f64 {
    let capped = balance.min(curve.soft_limit);
    if balance > curve.soft_limit {
        capped * (balance / curve.soft_limit).powf(curve.exponent)
    } else {
        capped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_limit_is_identity() {
        let curve = EffectiveCurve::new(1000.0, 0.2);
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(250.0), 250.0);
        assert_eq!(curve.apply(1000.0), 1000.0);
    }

    #[test]
    fn test_double_the_limit() {
        let curve = EffectiveCurve::new(1000.0, 0.2);
        let expected = 1000.0 * 2f64.powf(0.2);
        assert!((curve.apply(2000.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_exponent_caps_hard() {
        let curve = EffectiveCurve::new(1.0, 0.0);
        assert_eq!(curve.apply(64.0), 1.0);
    }

    #[test]
    fn test_monotone_above_limit() {
        let curve = EffectiveCurve::new(1000.0, 1.0 / 6.0);
        let mut last = curve.apply(1000.0);
        for balance in [1500.0, 4000.0, 16_000.0, 1e6] {
            let value = curve.apply(balance);
            assert!(value > last);
            assert!(value < balance);
            last = value;
        }
    }
}
