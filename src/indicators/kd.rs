// =============================================================================
// KD (Stochastic Oscillator, Taiwan convention)
// =============================================================================
//
//   RSV_t = (close_t - LL) / (HH - LL) * 100     over the trailing `period` bars
//         = 50                                   when HH == LL
//   K_t   = 2/3 * K_{t-1} + 1/3 * RSV_t
//   D_t   = 2/3 * D_{t-1} + 1/3 * K_t
//
// Both recurrences start from a prior of 50 at the first computable bar.
// =============================================================================

use crate::market_data::Candle;

const SEED: f64 = 50.0;

/// K and D lines, index-aligned with the input candles.
#[derive(Debug, Clone)]
pub struct KdSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Compute the KD series. Indices `< period - 1` are NaN.
pub fn calculate_kd(candles: &[Candle], period: usize) -> KdSeries {
    let mut k = vec![f64::NAN; candles.len()];
    let mut d = vec![f64::NAN; candles.len()];
    if period == 0 {
        return KdSeries { k, d };
    }

    let mut prev_k = SEED;
    let mut prev_d = SEED;

    for i in (period - 1)..candles.len() {
        let window = &candles[i + 1 - period..=i];
        let highest = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);

        let rsv = if highest == lowest {
            50.0
        } else {
            (candles[i].close - lowest) / (highest - lowest) * 100.0
        };

        let k_val = (2.0 / 3.0) * prev_k + (1.0 / 3.0) * rsv;
        let d_val = (2.0 / 3.0) * prev_d + (1.0 / 3.0) * k_val;

        k[i] = k_val;
        d[i] = d_val;
        prev_k = k_val;
        prev_d = d_val;
    }

    KdSeries { k, d }
}
