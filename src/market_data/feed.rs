// =============================================================================
// Candle sources — mock random walk and deterministic trend fixture
// =============================================================================
//
// The engine never sees where candles come from.  Anything implementing
// `CandleSource` can feed it, as long as it returns a non-empty, strictly
// chronological series of finite OHLCV values.
// =============================================================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::candle::Candle;
use crate::types::Timeframe;

/// Parameters of a series to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub start_price: f64,
    pub count: usize,
    pub timeframe: Timeframe,
    /// When set, the whole path is rescaled so the last close equals it.
    pub target_end_price: Option<f64>,
}

impl SeriesRequest {
    pub fn new(start_price: f64, count: usize, timeframe: Timeframe) -> Self {
        Self {
            start_price,
            count,
            timeframe,
            target_end_price: None,
        }
    }

    pub fn with_target(mut self, target_end_price: Option<f64>) -> Self {
        self.target_end_price = target_end_price;
        self
    }
}

/// Producer of raw candle series.
pub trait CandleSource {
    fn series(&mut self, request: &SeriesRequest) -> Vec<Candle>;
}

// ---------------------------------------------------------------------------
// RandomWalkFeed
// ---------------------------------------------------------------------------

/// Seeded random walk.  Equal seeds and end instants give equal series.
pub struct RandomWalkFeed {
    rng: StdRng,
    end: NaiveDateTime,
}

impl RandomWalkFeed {
    /// `end` is the instant the last bar is stamped one bar before.
    pub fn new(seed: u64, end: NaiveDateTime) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            end,
        }
    }
}

impl CandleSource for RandomWalkFeed {
    fn series(&mut self, request: &SeriesRequest) -> Vec<Candle> {
        let tf = request.timeframe;
        let volatility = tf.volatility();
        let step = tf.bar_duration();
        let start = shift(self.end, step, request.count, false).unwrap_or(NaiveDateTime::MIN);

        let mut candles = Vec::with_capacity(request.count);
        let mut price = request.start_price;

        for i in 0..request.count {
            let stamp = shift(start, step, i, true).unwrap_or(NaiveDateTime::MAX);

            let change = price * volatility * (self.rng.gen::<f64>() - 0.5) * 2.0;
            let open = price;
            let close = price + change;
            let high = open.max(close) + self.rng.gen::<f64>() * price * (volatility / 2.0);
            let low = open.min(close) - self.rng.gen::<f64>() * price * (volatility / 2.0);
            let volume = (1000.0 + self.rng.gen::<f64>() * 50_000.0).floor();

            candles.push(Candle::new(date_label(stamp, tf), open, high, low, close, volume));
            price = close;
        }

        calibrate(&mut candles, request.target_end_price);
        debug!(count = candles.len(), timeframe = %tf, "random walk generated");
        candles
    }
}

// ---------------------------------------------------------------------------
// TrendFeed
// ---------------------------------------------------------------------------

/// Deterministic fixture: every close is the previous close times `growth`.
///
/// Bars open at the previous close and span exactly open..close, so a growth
/// above 1 is a clean uptrend and below 1 a clean downtrend.
pub struct TrendFeed {
    growth: f64,
    start: NaiveDateTime,
}

impl TrendFeed {
    pub fn new(growth: f64) -> Self {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);
        Self { growth, start }
    }
}

impl CandleSource for TrendFeed {
    fn series(&mut self, request: &SeriesRequest) -> Vec<Candle> {
        let step = request.timeframe.bar_duration();
        let mut candles = Vec::with_capacity(request.count);
        let mut prev_close = request.start_price;

        for i in 0..request.count {
            let open = prev_close;
            let close = if i == 0 { open } else { prev_close * self.growth };
            let stamp = shift(self.start, step, i, true).unwrap_or(NaiveDateTime::MAX);
            candles.push(Candle::new(
                date_label(stamp, request.timeframe),
                open,
                open.max(close),
                open.min(close),
                close,
                10_000.0,
            ));
            prev_close = close;
        }

        calibrate(&mut candles, request.target_end_price);
        candles
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `origin` moved by `bars` steps; `None` when the offset leaves chrono's
/// range.  Callers saturate to `NaiveDateTime::MIN`/`MAX`.
fn shift(origin: NaiveDateTime, step: Duration, bars: usize, forward: bool) -> Option<NaiveDateTime> {
    let span = step.checked_mul(i32::try_from(bars).ok()?)?;
    if forward {
        origin.checked_add_signed(span)
    } else {
        origin.checked_sub_signed(span)
    }
}

fn date_label(stamp: NaiveDateTime, timeframe: Timeframe) -> String {
    if timeframe.is_intraday() {
        stamp.format("%m-%d %H:%M").to_string()
    } else {
        stamp.format("%Y-%m-%d").to_string()
    }
}

/// Rescale OHLC so that the final close equals `target`.  Volumes are kept.
fn calibrate(candles: &mut [Candle], target: Option<f64>) {
    let Some(target) = target.filter(|t| *t != 0.0) else {
        return;
    };
    let Some(final_close) = candles.last().map(|c| c.close) else {
        return;
    };

    let ratio = target / final_close;
    for c in candles.iter_mut() {
        c.open *= ratio;
        c.high *= ratio;
        c.low *= ratio;
        c.close *= ratio;
    }
}
