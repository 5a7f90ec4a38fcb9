// =============================================================================
// Swing Plan — entry / target / stop derived from the latest record
// =============================================================================
//
//   atr        = ATR14, or close * 2 % when undefined
//   volatility = atr * 1.5
//   support    = MA20, or close * 95 % when undefined
//   entry      = support * 1.01 if close > support, else close
//   target     = entry + volatility * 3
//   stop       = support * 0.96
//
// Prices are rounded to two decimals.  Sentiment brackets are checked in the
// order StrongBuy (> 75), Buy (> 55), Sell (< 30), so a score of exactly 75
// lands in Buy and exactly 55 in Neutral.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::enrichment::EnrichedCandle;
use crate::indicators::defined;
use crate::types::Sentiment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingPlan {
    pub sentiment: Sentiment,
    pub entry_price: f64,
    pub target_price: f64,
    pub stop_loss_price: f64,
    pub strategy_text: String,
}

/// Map a clamped technical score to its sentiment bracket.
pub fn sentiment_for(tech_score: f64) -> Sentiment {
    if tech_score > 75.0 {
        Sentiment::StrongBuy
    } else if tech_score > 55.0 {
        Sentiment::Buy
    } else if tech_score < 30.0 {
        Sentiment::Sell
    } else {
        Sentiment::Neutral
    }
}

fn strategy_text(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::StrongBuy => {
            "Main-force holdings are concentrated and the averages point up; ride the trend toward the target."
        }
        Sentiment::Buy => "Lows keep stepping higher with steady dip buying; build positions along support.",
        Sentiment::Sell => "Distribution is visible and overhead supply is heavy; trim into rebounds.",
        Sentiment::Neutral => "Main force is on the sidelines and price ranges in a box; trade the range.",
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the swing plan for `last` given its clamped technical score.
pub fn plan_swing(last: &EnrichedCandle, tech_score: f64) -> SwingPlan {
    let close = last.close();
    let atr = defined(last.atr).unwrap_or(close * 0.02);
    let volatility = atr * 1.5;

    let support = defined(last.ma20).unwrap_or(close * 0.95);
    let entry = if close > support { support * 1.01 } else { close };
    let target = entry + volatility * 3.0;
    let stop_loss = support * 0.96;

    let sentiment = sentiment_for(tech_score);

    SwingPlan {
        sentiment,
        entry_price: round2(entry),
        target_price: round2(target),
        stop_loss_price: round2(stop_loss),
        strategy_text: strategy_text(sentiment).to_string(),
    }
}
