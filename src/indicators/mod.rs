// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators shown on
// the radar.  Every function returns a full-length series aligned with its
// input: index `i` of the output belongs to index `i` of the input, and
// positions without enough history hold `f64::NAN`.  NaN compares false to
// everything, so downstream rules only fire on values that are present.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod kd;
pub mod macd;
pub mod momentum;
pub mod psy;
pub mod rsi;
pub mod sma;

pub use atr::calculate_atr;
pub use bollinger::{calculate_bollinger, BollingerSeries};
pub use ema::calculate_ema;
pub use kd::{calculate_kd, KdSeries};
pub use macd::{calculate_macd, MacdSeries};
pub use momentum::calculate_momentum;
pub use psy::calculate_psy;
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;

/// `true` when `value` carries a number rather than the undefined sentinel.
#[inline]
pub fn is_defined(value: f64) -> bool {
    !value.is_nan()
}

/// `Some(value)` when defined, `None` for the sentinel.
#[inline]
pub fn defined(value: f64) -> Option<f64> {
    is_defined(value).then_some(value)
}

/// Arithmetic mean over a trailing window, NaN before the window fills.
///
/// Shared by SMA, Bollinger and ATR.
pub(crate) fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; values.len()];
    }

    let period_f = period as f64;
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                f64::NAN
            } else {
                values[i + 1 - period..=i].iter().sum::<f64>() / period_f
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_filters_nan() {
        assert_eq!(defined(1.5), Some(1.5));
        assert_eq!(defined(f64::NAN), None);
        assert!(!is_defined(f64::NAN));
    }

    #[test]
    fn rolling_mean_gates_on_window() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 2);
        assert!(out[0].is_nan());
        assert_eq!(&out[1..], &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn rolling_mean_period_zero_is_all_nan() {
        let out = rolling_mean(&[1.0, 2.0], 0);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }
}
