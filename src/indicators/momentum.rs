// =============================================================================
// Momentum (MTM)
// =============================================================================
//
//   MTM_t = close_t - close_{t-period}
//
// Positive momentum indicates upward drift over the look-back; negative
// indicates downward.  Undefined for t < period, and everywhere for a zero
// period.

/// Calculate the momentum series for the given closing prices and period.
pub fn calculate_momentum(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; closes.len()];
    }
    (0..closes.len())
        .map(|i| {
            if i < period {
                f64::NAN
            } else {
                closes[i] - closes[i - period]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_basic() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let mtm = calculate_momentum(&closes, 10);
        assert!(mtm[9].is_nan());
        assert_eq!(mtm[10], 10.0);
        assert_eq!(mtm[19], 10.0);
    }

    #[test]
    fn momentum_insufficient_data() {
        let mtm = calculate_momentum(&[1.0, 2.0, 3.0], 10);
        assert_eq!(mtm.len(), 3);
        assert!(mtm.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn momentum_zero_period_is_undefined() {
        let mtm = calculate_momentum(&[1.0, 2.0, 3.0], 0);
        assert_eq!(mtm.len(), 3);
        assert!(mtm.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn momentum_negative_in_downtrend() {
        let closes: Vec<f64> = (1..=15).rev().map(|x| x as f64).collect();
        let mtm = calculate_momentum(&closes, 5);
        assert_eq!(mtm[14], -5.0);
    }
}
