// =============================================================================
// MACD (Moving Average Convergence / Divergence)
// =============================================================================
//
//   macd   = EMA(fast) - EMA(slow)
//   signal = EMA(signal_period) of the macd line
//   hist   = macd - signal
//
// Both EMAs follow the no-warm-up rule of `ema.rs`, so the macd line is
// defined from index 0.  The signal recurrence runs over the defined macd
// entries only, seeded with the first one; an undefined macd entry leaves the
// signal undefined at that index and does not advance the recurrence.  A
// zero period anywhere leaves the affected lines undefined.

use super::ema::calculate_ema;

/// Index-aligned MACD output, including the two EMAs it is built from.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub hist: Vec<f64>,
}

/// Compute MACD with the given fast / slow / signal periods (12 / 26 / 9 on
/// the radar).
pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);

    let macd: Vec<f64> = ema_fast.iter().zip(&ema_slow).map(|(f, s)| f - s).collect();

    let k = 2.0 / (signal_period + 1) as f64;
    let mut signal = vec![f64::NAN; macd.len()];
    let mut prev: Option<f64> = None;
    for (i, &value) in macd.iter().enumerate() {
        if signal_period == 0 || value.is_nan() {
            continue;
        }
        let next = match prev {
            None => value,
            Some(p) => value * k + p * (1.0 - k),
        };
        signal[i] = next;
        prev = Some(next);
    }

    let hist = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        ema_fast,
        ema_slow,
        macd,
        signal,
        hist,
    }
}
