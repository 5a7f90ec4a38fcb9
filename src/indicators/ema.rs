// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_0      = close_0
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The series is seeded with the first close and has no warm-up gap.  This is a
// known approximation of the SMA-seeded textbook EMA; displayed values depend
// on it, so it is kept as is.
// =============================================================================

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// Defined at every index for a positive period, including index 0 where it
/// equals `closes[0]`.
///
/// # Edge cases
/// - empty input => empty vec
/// - `period == 0` => all NaN, same length as the input
/// - a NaN close poisons every later value, as the recurrence carries it
pub fn calculate_ema(closes: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = closes.first() else {
        return Vec::new();
    };
    if period == 0 {
        return vec![f64::NAN; closes.len()];
    }

    let multiplier = 2.0 / (period + 1) as f64;

    let mut result = Vec::with_capacity(closes.len());
    result.push(first);

    let mut prev_ema = first;
    for &close in &closes[1..] {
        let ema = close * multiplier + prev_ema * (1.0 - multiplier);
        result.push(ema);
        prev_ema = ema;
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).is_empty());
    }

    #[test]
    fn ema_zero_period_is_undefined() {
        let ema = calculate_ema(&[1.0, 3.0, 3.0], 0);
        assert_eq!(ema.len(), 3);
        assert!(ema.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn ema_defined_from_index_zero() {
        let closes = vec![7.0, 8.0, 9.0];
        let ema = calculate_ema(&closes, 12);
        assert_eq!(ema.len(), 3);
        assert_eq!(ema[0], 7.0);
        assert!(ema.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..=10], seed = first close, multiplier = 1/3
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let ema = calculate_ema(&closes, 5);
        assert_eq!(ema.len(), closes.len());

        let mult = 2.0 / 6.0;
        let mut expected = closes[0];
        for (i, &c) in closes.iter().enumerate().skip(1) {
            expected = c * mult + expected * (1.0 - mult);
            assert!((ema[i] - expected).abs() < 1e-10, "got {}, expected {expected}", ema[i]);
        }
    }

    #[test]
    fn ema_flat_series_stays_flat() {
        let ema = calculate_ema(&[100.0; 30], 26);
        assert!(ema.iter().all(|v| (v - 100.0).abs() < 1e-12));
    }

    #[test]
    fn ema_lags_a_rising_series() {
        let closes: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let ema = calculate_ema(&closes, 9);
        for i in 1..closes.len() {
            assert!(ema[i] < closes[i]);
            assert!(ema[i] > ema[i - 1]);
        }
    }
}
