// =============================================================================
// Screener — feed → enrichment → scoring → ranking → filtering
// =============================================================================
//
// Builds one `StockAnalysis` per code from a generated history, ranks a
// random universe of listed stocks by total score, resolves free-text
// searches and applies the active filter set.
// =============================================================================

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::enrichment::{enrich, EnrichedCandle};
use crate::market_data::universe::{find, normalize_code, search_suggestions};
use crate::market_data::{Candle, CandleSource, SeriesRequest, LISTED_STOCKS};
use crate::signals::swing::round2;
use crate::signals::{recommend, score_series, summarize, value_ladder, ScoreResult, Valuation};
use crate::smart_filters::FilterState;
use crate::types::{Recommendation, Timeframe};

const FUND_WEIGHT: f64 = 0.5;

/// Full analysis of one stock: the enriched series plus everything derived
/// from its last record.
#[derive(Debug, Clone, Serialize)]
pub struct StockAnalysis {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub series: Vec<EnrichedCandle>,
    pub score: ScoreResult,
    pub recommendation: Recommendation,
    pub action: String,
    pub summary: Vec<String>,
    pub fund_score: f64,
    pub total_score: f64,
    /// Technical score with a ±5 jitter, as shown on the main-force gauge.
    pub main_force_score: f64,
    pub valuation: Option<Valuation>,
}

impl StockAnalysis {
    pub fn latest(&self) -> Option<&EnrichedCandle> {
        self.series.last()
    }

    pub fn passes(&self, filters: &FilterState) -> bool {
        match self.latest() {
            Some(last) => filters.passes(&self.score.tags, last),
            None => false,
        }
    }

    /// Compact view without the full series, as printed by the host.
    pub fn row(&self) -> RadarRow<'_> {
        RadarRow {
            code: &self.code,
            name: &self.name,
            price: self.price,
            change: self.change,
            change_pct: self.change_pct,
            latest: self.latest(),
            score: &self.score,
            recommendation: self.recommendation,
            action: &self.action,
            summary: &self.summary,
            fund_score: self.fund_score,
            total_score: self.total_score,
            main_force_score: self.main_force_score,
            valuation: self.valuation.as_ref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RadarRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub latest: Option<&'a EnrichedCandle>,
    pub score: &'a ScoreResult,
    pub recommendation: Recommendation,
    pub action: &'a str,
    pub summary: &'a [String],
    pub fund_score: f64,
    pub total_score: f64,
    pub main_force_score: f64,
    pub valuation: Option<&'a Valuation>,
}

/// Enrich, score and summarise `candles`.  `None` for an empty history.
///
/// Fund and total scores are left at zero, the main-force score equals the
/// technical score and there is no valuation; `Screener::create_stock` fills
/// them in.
pub fn analyze(code: &str, name: &str, candles: &[Candle]) -> Option<StockAnalysis> {
    let series = enrich(candles);
    let score = score_series(&series)?;
    let last = series.last()?;

    let (change, change_pct) = match series.len().checked_sub(2).and_then(|i| series.get(i)) {
        Some(prev) if prev.close() != 0.0 => {
            let change = last.close() - prev.close();
            (change, change / prev.close() * 100.0)
        }
        _ => (0.0, 0.0),
    };

    let (recommendation, action) = recommend(score.tech_score);
    let summary = summarize(&score.tags, last);
    let price = round2(last.close());

    debug!(
        code,
        tech_score = score.tech_score,
        recommendation = %recommendation,
        "stock analysed"
    );

    Some(StockAnalysis {
        code: code.to_string(),
        name: name.to_string(),
        price,
        change: round2(change),
        change_pct: round2(change_pct),
        series,
        recommendation,
        action: action.to_string(),
        summary,
        fund_score: 0.0,
        total_score: 0.0,
        main_force_score: score.tech_score,
        valuation: None,
        score,
    })
}

/// Stocks in `stocks` passing every enabled filter, order preserved.
pub fn screen<'a>(stocks: &'a [StockAnalysis], filters: &FilterState) -> Vec<&'a StockAnalysis> {
    let passed: Vec<&StockAnalysis> = stocks.iter().filter(|s| s.passes(filters)).collect();
    debug!(total = stocks.len(), passed = passed.len(), "screen applied");
    passed
}

fn resolve_name(token: &str) -> Option<String> {
    if token.is_ascii() {
        return None;
    }
    search_suggestions(token).first().map(|l| l.code.to_string())
}

// =============================================================================
// Screener
// =============================================================================

pub struct Screener<S: CandleSource> {
    feed: S,
    rng: StdRng,
    timeframe: Timeframe,
    history_len: usize,
}

impl<S: CandleSource> Screener<S> {
    pub fn new(feed: S, seed: u64, timeframe: Timeframe, history_len: usize) -> Self {
        Self {
            feed,
            rng: StdRng::seed_from_u64(seed),
            timeframe,
            history_len,
        }
    }

    /// Generate and analyse one stock.  Listed codes calibrate the history to
    /// their reference price; unknown codes start at a random 50–550.
    pub fn create_stock(&mut self, code: &str) -> Option<StockAnalysis> {
        let listing = find(code.trim());
        let code = normalize_code(code);
        let name = listing.map_or("Unlisted", |l| l.name);
        let ref_price = listing.map(|l| l.ref_price);

        let start_price = match ref_price {
            Some(price) => price,
            None => 50.0 + self.rng.gen::<f64>() * 500.0,
        };
        let request = SeriesRequest::new(start_price, self.history_len, self.timeframe)
            .with_target(ref_price);
        let candles = self.feed.series(&request);

        let mut stock = analyze(&code, name, &candles)?;
        stock.fund_score = (self.rng.gen::<f64>() * 40.0).floor() + 40.0;
        stock.total_score = stock.score.tech_score + stock.fund_score * FUND_WEIGHT;
        stock.main_force_score = stock.score.tech_score + (self.rng.gen::<f64>() * 10.0 - 5.0);

        let pe_estimate = 15.0 + self.rng.gen::<f64>() * 10.0;
        let dividend_yield = 1.0 + self.rng.gen::<f64>() * 4.0;
        stock.valuation = Some(value_ladder(stock.price, pe_estimate, dividend_yield));
        Some(stock)
    }

    /// `count` distinct listed stocks ranked by total score, best first.
    pub fn universe(&mut self, count: usize) -> Vec<StockAnalysis> {
        let picks: Vec<&str> = LISTED_STOCKS
            .choose_multiple(&mut self.rng, count)
            .map(|l| l.code)
            .collect();

        let mut stocks: Vec<StockAnalysis> = picks
            .into_iter()
            .filter_map(|code| self.create_stock(code))
            .collect();
        stocks.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        info!(requested = count, built = stocks.len(), "universe generated");
        stocks
    }

    /// Resolve comma or space separated codes.  A token matching the code of
    /// an entry in `existing` reuses it; anything else is generated fresh.
    /// Stock names (non-ASCII tokens) resolve to the first listed match.
    pub fn search(&mut self, query: &str, existing: &[StockAnalysis]) -> Vec<StockAnalysis> {
        query
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let token = token.to_uppercase();
                let token = resolve_name(&token).unwrap_or(token);
                match existing.iter().find(|s| s.code.contains(token.as_str())) {
                    Some(hit) => Some(hit.clone()),
                    None => self.create_stock(&token),
                }
            })
            .collect()
    }
}
