// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
//   SMA_t = (close_t + close_{t-1} + ... + close_{t-period+1}) / period
//
// Undefined (NaN) until `period` closes are available.

use super::rolling_mean;

/// Compute the SMA series for `closes`.
///
/// The output has the same length as the input; indices `< period - 1` are NaN.
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<f64> {
    rolling_mean(closes, period)
}
