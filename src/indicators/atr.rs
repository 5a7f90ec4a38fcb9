// =============================================================================
// Average True Range (ATR) — simple average of True Range
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR_0 = H_0 - L_0
//   TR_t = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR_t is the arithmetic mean of the trailing `period` TR values (no Wilder
// smoothing), undefined for t < period - 1.
//
// Default period on the radar: 14
// =============================================================================

use super::rolling_mean;
use crate::market_data::Candle;

/// Compute the True Range of every candle (oldest first).
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let hl = c.high - c.low;
            if i == 0 {
                return hl;
            }
            let prev_close = candles[i - 1].close;
            let hc = (c.high - prev_close).abs();
            let lc = (c.low - prev_close).abs();
            hl.max(hc).max(lc)
        })
        .collect()
}

/// Compute the ATR series from a slice of OHLCV candles.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<f64> {
    rolling_mean(&true_range(candles), period)
}
