// =============================================================================
// Series Enrichment
// =============================================================================
//
// Runs the fixed indicator set over a raw candle series and merges every
// output positionally into one `EnrichedCandle` per input candle:
//
//   SMA 5/10/20/60/120/240 · EMA 12/26 · RSI 6/14 · PSY 12/24
//   Bollinger 20/2 · MACD 12/26/9 · KD 9 · ATR 14 · Momentum 10
//
// The input is borrowed read-only; output length always equals input length.
// =============================================================================

use serde::Serialize;
use tracing::debug;

use crate::indicators::{
    calculate_atr, calculate_bollinger, calculate_kd, calculate_macd, calculate_momentum,
    calculate_psy, calculate_rsi, calculate_sma,
};
use crate::market_data::{closes, Candle};

/// A candle plus every indicator value at its index.  Undefined values are
/// NaN and serialise as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub ma5: f64,
    pub ma10: f64,
    pub ma20: f64,
    pub ma60: f64,
    pub ma120: f64,
    pub ma240: f64,
    pub ema12: f64,
    pub ema26: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub middle_band: f64,
    pub rsi6: f64,
    pub rsi14: f64,
    pub psy12: f64,
    pub psy24: f64,
    pub macd: f64,
    pub signal: f64,
    pub hist: f64,
    pub k: f64,
    pub d: f64,
    pub atr: f64,
    pub momentum: f64,
}

impl EnrichedCandle {
    pub fn close(&self) -> f64 {
        self.candle.close
    }

    /// Bollinger band width `(upper - lower) / middle`; NaN when any band is
    /// undefined.
    pub fn band_width(&self) -> f64 {
        (self.upper_band - self.lower_band) / self.middle_band
    }
}

/// Enrich `candles` with the full indicator set.
pub fn enrich(candles: &[Candle]) -> Vec<EnrichedCandle> {
    let closes = closes(candles);

    let ma5 = calculate_sma(&closes, 5);
    let ma10 = calculate_sma(&closes, 10);
    let ma20 = calculate_sma(&closes, 20);
    let ma60 = calculate_sma(&closes, 60);
    let ma120 = calculate_sma(&closes, 120);
    let ma240 = calculate_sma(&closes, 240);
    let rsi6 = calculate_rsi(&closes, 6);
    let rsi14 = calculate_rsi(&closes, 14);
    let psy12 = calculate_psy(&closes, 12);
    let psy24 = calculate_psy(&closes, 24);
    let bb = calculate_bollinger(&closes, 20, 2.0);
    let macd = calculate_macd(&closes, 12, 26, 9);
    let kd = calculate_kd(candles, 9);
    let atr = calculate_atr(candles, 14);
    let momentum = calculate_momentum(&closes, 10);

    let enriched: Vec<EnrichedCandle> = candles
        .iter()
        .enumerate()
        .map(|(i, c)| EnrichedCandle {
            candle: c.clone(),
            ma5: ma5[i],
            ma10: ma10[i],
            ma20: ma20[i],
            ma60: ma60[i],
            ma120: ma120[i],
            ma240: ma240[i],
            ema12: macd.ema_fast[i],
            ema26: macd.ema_slow[i],
            upper_band: bb.upper[i],
            lower_band: bb.lower[i],
            middle_band: bb.middle[i],
            rsi6: rsi6[i],
            rsi14: rsi14[i],
            psy12: psy12[i],
            psy24: psy24[i],
            macd: macd.macd[i],
            signal: macd.signal[i],
            hist: macd.hist[i],
            k: kd.k[i],
            d: kd.d[i],
            atr: atr[i],
            momentum: momentum[i],
        })
        .collect();

    debug!(candles = candles.len(), "series enriched");
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::{CandleSource, SeriesRequest, TrendFeed};
    use crate::types::Timeframe;

    fn uptrend(count: usize) -> Vec<Candle> {
        TrendFeed::new(1.01).series(&SeriesRequest::new(100.0, count, Timeframe::Day))
    }

    #[test]
    fn enrich_preserves_length_and_order() {
        let candles = uptrend(75);
        let enriched = enrich(&candles);
        assert_eq!(enriched.len(), candles.len());
        for (e, c) in enriched.iter().zip(&candles) {
            assert_eq!(&e.candle, c);
        }
    }

    #[test]
    fn enrich_does_not_touch_input() {
        let candles = uptrend(30);
        let before = candles.clone();
        let _ = enrich(&candles);
        assert_eq!(candles, before);
    }

    #[test]
    fn enrich_empty_series() {
        assert!(enrich(&[]).is_empty());
    }

    #[test]
    fn lookback_gates_are_respected() {
        let enriched = enrich(&uptrend(130));

        assert!(enriched[3].ma5.is_nan());
        assert!(!enriched[4].ma5.is_nan());
        assert!(enriched[58].ma60.is_nan());
        assert!(!enriched[59].ma60.is_nan());
        assert!(!enriched[119].ma120.is_nan());
        assert!(enriched[129].ma240.is_nan());
        assert!(enriched[13].rsi14.is_nan());
        assert!(!enriched[14].rsi14.is_nan());
        assert!(enriched[11].psy12.is_nan());
        assert!(!enriched[12].psy12.is_nan());
        assert!(enriched[18].upper_band.is_nan());
        assert!(!enriched[19].middle_band.is_nan());
        assert!(enriched[7].k.is_nan());
        assert!(!enriched[8].d.is_nan());
        assert!(enriched[12].atr.is_nan());
        assert!(!enriched[13].atr.is_nan());
        assert!(enriched[9].momentum.is_nan());
        assert!(!enriched[10].momentum.is_nan());

        // No warm-up on the EMA family.
        assert_eq!(enriched[0].ema12, enriched[0].close());
        assert_eq!(enriched[0].ema26, enriched[0].close());
        assert!(!enriched[0].macd.is_nan());
        assert!(!enriched[0].hist.is_nan());
    }

    #[test]
    fn enriched_fields_match_standalone_indicators() {
        let candles = uptrend(60);
        let enriched = enrich(&candles);
        let closes = closes(&candles);
        let sma20 = calculate_sma(&closes, 20);
        let rsi6 = calculate_rsi(&closes, 6);
        for i in 0..candles.len() {
            assert!(sma20[i] == enriched[i].ma20 || (sma20[i].is_nan() && enriched[i].ma20.is_nan()));
            assert!(rsi6[i] == enriched[i].rsi6 || (rsi6[i].is_nan() && enriched[i].rsi6.is_nan()));
        }
    }

    #[test]
    fn undefined_values_serialise_as_null() {
        let enriched = enrich(&uptrend(3));
        let json = serde_json::to_value(&enriched[2]).unwrap();
        assert!(json["ma20"].is_null());
        assert!(json["upperBand"].is_null());
        assert!(json["ema12"].is_number());
        assert_eq!(json["date"], enriched[2].candle.date.as_str());
    }
}
