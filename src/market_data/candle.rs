use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single OHLCV observation for one time bucket.
///
/// `date` is an opaque, chronologically ordered label (`YYYY-MM-DD` for daily
/// and longer bars, `MM-DD HH:MM` for intraday bars). `high >= max(open, close)`
/// and `low <= min(open, close)` are expected but never enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Extract the close prices of `candles` (oldest first).
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
