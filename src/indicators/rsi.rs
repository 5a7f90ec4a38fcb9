// =============================================================================
// Relative Strength Index (RSI)
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — For i < period, accumulate gains / losses of consecutive closes
//          (output undefined).
// Step 2 — At i == period, seed the averages with the accumulated sums:
//            avg_gain = Σgain / period,  avg_loss = Σloss / period
// Step 3 — For i > period, recompute the sums directly over the trailing
//          `period` changes (a plain re-average, NOT Wilder's recursive
//          smoothing).
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS),  or exactly 100 when the loss sum is 0.
//
// The seed and the trailing re-average cover the same window at i == period,
// so the two phases agree there; the split is kept because displayed values
// are defined this way rather than by the textbook smoothed RSI.
// =============================================================================

/// Compute the full RSI series for the given `closes` and `period`.
///
/// # Edge cases
/// - index 0 and every index `< period` => NaN
/// - `period == 0` => all NaN
/// - zero loss sum over the window => 100.0 (flat windows included)
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; closes.len()];
    if period == 0 {
        return result;
    }

    let mut seed_gain = 0.0_f64;
    let mut seed_loss = 0.0_f64;

    for i in 1..closes.len() {
        if i <= period {
            let (gain, loss) = split_change(closes[i] - closes[i - 1]);
            seed_gain += gain;
            seed_loss += loss;
            if i == period {
                result[i] = rsi_from_sums(seed_gain, seed_loss, period);
            }
            continue;
        }

        let (sum_gain, sum_loss) = (i + 1 - period..=i).fold((0.0_f64, 0.0_f64), |(g, l), j| {
            let (gain, loss) = split_change(closes[j] - closes[j - 1]);
            (g + gain, l + loss)
        });
        result[i] = rsi_from_sums(sum_gain, sum_loss, period);
    }

    result
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Split a price change into its (gain, loss) parts, both non-negative.
fn split_change(change: f64) -> (f64, f64) {
    if change > 0.0 {
        (change, 0.0)
    } else if change < 0.0 {
        (0.0, -change)
    } else {
        (0.0, 0.0)
    }
}

/// Convert window sums into an RSI value in [0, 100].
fn rsi_from_sums(sum_gain: f64, sum_loss: f64, period: usize) -> f64 {
    if sum_loss == 0.0 {
        return 100.0;
    }
    let period_f = period as f64;
    let rs = (sum_gain / period_f) / (sum_loss / period_f);
    100.0 - 100.0 / (1.0 + rs)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        let rsi = calculate_rsi(&[1.0, 2.0, 3.0], 0);
        assert!(rsi.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes => indices 0..=13, all below period.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        assert_eq!(rsi.len(), 14);
        assert!(rsi.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_first_value_at_period() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 6);
        assert!(rsi[5].is_nan());
        assert!(!rsi[6].is_nan());
    }

    #[test]
    fn rsi_all_gains_is_exactly_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        for &v in &rsi[14..] {
            assert_eq!(v, 100.0);
        }
    }

    #[test]
    fn rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        for &v in &rsi[14..] {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_reports_100() {
        let rsi = calculate_rsi(&[100.0; 30], 14);
        for &v in &rsi[14..] {
            assert_eq!(v, 100.0);
        }
    }

    #[test]
    fn rsi_uses_trailing_window_not_smoothing() {
        // Alternate +2 / -1 moves, then read the value at index 10 with
        // period 4: changes at j = 7..=10.
        let mut closes = vec![50.0];
        for i in 1..=12 {
            let step = if i % 2 == 1 { 2.0 } else { -1.0 };
            closes.push(closes[i - 1] + step);
        }
        let rsi = calculate_rsi(&closes, 4);

        let (mut g, mut l) = (0.0, 0.0);
        for j in 7..=10 {
            let c = closes[j] - closes[j - 1];
            if c > 0.0 {
                g += c;
            } else {
                l -= c;
            }
        }
        let expected = 100.0 - 100.0 / (1.0 + (g / 4.0) / (l / 4.0));
        assert!((rsi[10] - expected).abs() < 1e-10);
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for period in [6, 14] {
            for &v in calculate_rsi(&closes, period).iter().filter(|v| !v.is_nan()) {
                assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
            }
        }
    }
}
