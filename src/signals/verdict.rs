// =============================================================================
// Verdict — headline recommendation and summary lines for a scored stock
// =============================================================================

use super::tech_score::Tag;
use crate::enrichment::EnrichedCandle;
use crate::indicators::defined;
use crate::types::Recommendation;

/// Recommendation bracket on the clamped score: `>= 75` buy, `<= 40` sell.
pub fn recommend(tech_score: f64) -> (Recommendation, &'static str) {
    if tech_score >= 75.0 {
        (
            Recommendation::Buy,
            "Trend is strong; accumulate on pullbacks and trail the 5-day average.",
        )
    } else if tech_score <= 40.0 {
        (
            Recommendation::Sell,
            "Downtrend is clear; reduce exposure or sell into rebounds.",
        )
    } else {
        (
            Recommendation::Neutral,
            "Range-bound; buy low and sell high, or wait for a breakout.",
        )
    }
}

/// Short plain-language reading of the latest record.
pub fn summarize(tags: &[Tag], last: &EnrichedCandle) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    lines.push(if tags.contains(&Tag::BullishAlignment) {
        "Moving averages are in full bullish alignment; the long-term trend points up.".to_string()
    } else {
        "Moving averages are tangled or bearish; the trend is not yet clear.".to_string()
    });

    let rsi_hot = defined(last.rsi14).is_some_and(|rsi| rsi > 70.0);
    lines.push(if rsi_hot {
        "Short-term RSI is overheated; watch for a pullback from the stretch.".to_string()
    } else {
        "RSI sits in a healthy range.".to_string()
    });

    if defined(last.psy12).is_some_and(|psy| psy > 75.0) {
        lines.push("PSY shows extreme optimism; chasing here is risky.".to_string());
    }

    // An undefined MA20 reads as zero, so a short history counts as "above".
    let ma20 = defined(last.ma20).unwrap_or(0.0);
    lines.push(if last.close() > ma20 {
        "Price holds above the monthly average; support looks firm.".to_string()
    } else {
        "Price has slipped below the monthly average; consolidation may drag on.".to_string()
    });

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::tech_score::tests::blank;

    #[test]
    fn recommendation_brackets() {
        assert_eq!(recommend(75.0).0, Recommendation::Buy);
        assert_eq!(recommend(74.9).0, Recommendation::Neutral);
        assert_eq!(recommend(40.1).0, Recommendation::Neutral);
        assert_eq!(recommend(40.0).0, Recommendation::Sell);
    }

    #[test]
    fn summary_without_history() {
        let lines = summarize(&[], &blank(50.0));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("not yet clear"));
        assert!(lines[1].contains("healthy"));
        assert!(lines[2].contains("above"));
    }

    #[test]
    fn summary_hot_bullish_stock() {
        let mut last = blank(120.0);
        last.rsi14 = 82.0;
        last.psy12 = 83.3;
        last.ma20 = 125.0;
        let lines = summarize(&[Tag::BullishAlignment], &last);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("bullish alignment"));
        assert!(lines[1].contains("overheated"));
        assert!(lines[2].contains("PSY"));
        assert!(lines[3].contains("below"));
    }
}
