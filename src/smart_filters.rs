// =============================================================================
// Smart Filters — named screening predicates over tags and the latest record
// =============================================================================
//
// Each filter is individually gated by a flag in `FilterState`.  A disabled
// filter is skipped (passes); a screen is the conjunction of the enabled ones,
// so an empty selection passes everything.
//
// Filters:
//   - Trend Bullish:       tags contain bullish-alignment
//   - Trend Long Bullish:  close > MA60 > MA120
//   - RSI Bullish:         50 < RSI14 < 70
//   - PSY Hot:             PSY12 > 70
//   - PSY Cold:            PSY12 < 30
//   - Price Box Breakout:  breakout-upper-band or bollinger-squeeze tag
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enrichment::EnrichedCandle;
use crate::indicators::defined;
use crate::signals::Tag;

fn default_true() -> bool {
    true
}

/// Which filters are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default = "default_true")]
    pub trend_bullish: bool,
    #[serde(default)]
    pub trend_long_bullish: bool,
    #[serde(default)]
    pub rsi_bullish: bool,
    #[serde(default)]
    pub psy_hot: bool,
    #[serde(default)]
    pub psy_cold: bool,
    #[serde(default)]
    pub price_box_breakout: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            trend_bullish: true,
            trend_long_bullish: false,
            rsi_bullish: false,
            psy_hot: false,
            psy_cold: false,
            price_box_breakout: false,
        }
    }
}

impl FilterState {
    /// Every filter off.
    pub fn none() -> Self {
        Self {
            trend_bullish: false,
            ..Self::default()
        }
    }

    /// Enabled filters in evaluation order.
    pub fn enabled(&self) -> Vec<ScreenFilter> {
        [
            (self.trend_bullish, ScreenFilter::TrendBullish),
            (self.trend_long_bullish, ScreenFilter::TrendLongBullish),
            (self.rsi_bullish, ScreenFilter::RsiBullish),
            (self.psy_hot, ScreenFilter::PsyHot),
            (self.psy_cold, ScreenFilter::PsyCold),
            (self.price_box_breakout, ScreenFilter::PriceBoxBreakout),
        ]
        .into_iter()
        .filter_map(|(on, filter)| on.then_some(filter))
        .collect()
    }

    /// Conjunction of the enabled filters.
    pub fn passes(&self, tags: &[Tag], last: &EnrichedCandle) -> bool {
        for filter in self.enabled() {
            if !filter.predicate(tags, last) {
                debug!(filter = %filter, close = last.close(), "screen rejected");
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenFilter {
    TrendBullish,
    TrendLongBullish,
    RsiBullish,
    PsyHot,
    PsyCold,
    PriceBoxBreakout,
}

impl ScreenFilter {
    pub fn predicate(self, tags: &[Tag], last: &EnrichedCandle) -> bool {
        match self {
            Self::TrendBullish => tags.contains(&Tag::BullishAlignment),
            Self::TrendLongBullish => match (defined(last.ma60), defined(last.ma120)) {
                (Some(ma60), Some(ma120)) => last.close() > ma60 && ma60 > ma120,
                _ => false,
            },
            Self::RsiBullish => defined(last.rsi14).is_some_and(|rsi| rsi > 50.0 && rsi < 70.0),
            Self::PsyHot => defined(last.psy12).is_some_and(|psy| psy > 70.0),
            Self::PsyCold => defined(last.psy12).is_some_and(|psy| psy < 30.0),
            Self::PriceBoxBreakout => {
                tags.contains(&Tag::BreakoutUpperBand) || tags.contains(&Tag::BollingerSqueeze)
            }
        }
    }
}

impl std::fmt::Display for ScreenFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TrendBullish => "trend_bullish",
            Self::TrendLongBullish => "trend_long_bullish",
            Self::RsiBullish => "rsi_bullish",
            Self::PsyHot => "psy_hot",
            Self::PsyCold => "psy_cold",
            Self::PriceBoxBreakout => "price_box_breakout",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::tech_score::tests::{all_positive, blank};

    #[test]
    fn default_state_only_trend() {
        let state = FilterState::default();
        assert_eq!(state.enabled(), vec![ScreenFilter::TrendBullish]);
        assert!(FilterState::none().enabled().is_empty());
    }

    #[test]
    fn no_filters_pass_everything() {
        let state = FilterState::none();
        assert!(state.passes(&[], &blank(10.0)));
        let (last, _) = all_positive();
        assert!(state.passes(&[Tag::RsiOverheated], &last));
    }

    #[test]
    fn contradictory_filters_pass_nothing() {
        let state = FilterState {
            psy_hot: true,
            psy_cold: true,
            ..FilterState::none()
        };
        for psy in [10.0, 50.0, 90.0] {
            let mut last = blank(100.0);
            last.psy12 = psy;
            assert!(!state.passes(&[], &last));
        }
    }

    #[test]
    fn rsi_bounds_are_strict() {
        let filter = ScreenFilter::RsiBullish;
        let mut last = blank(100.0);
        assert!(!filter.predicate(&[], &last));
        last.rsi14 = 50.0;
        assert!(!filter.predicate(&[], &last));
        last.rsi14 = 70.0;
        assert!(!filter.predicate(&[], &last));
        last.rsi14 = 60.0;
        assert!(filter.predicate(&[], &last));
    }

    #[test]
    fn psy_filters_ignore_undefined() {
        let last = blank(100.0);
        assert!(!ScreenFilter::PsyHot.predicate(&[], &last));
        assert!(!ScreenFilter::PsyCold.predicate(&[], &last));
    }

    #[test]
    fn trend_bullish_tracks_tag() {
        let last = blank(100.0);
        assert!(ScreenFilter::TrendBullish.predicate(&[Tag::BullishAlignment], &last));
        assert!(!ScreenFilter::TrendBullish.predicate(&[Tag::Oversold], &last));
    }

    #[test]
    fn long_trend_needs_both_averages() {
        let filter = ScreenFilter::TrendLongBullish;
        let mut last = blank(120.0);
        last.ma60 = 110.0;
        assert!(!filter.predicate(&[], &last));
        last.ma120 = 100.0;
        assert!(filter.predicate(&[], &last));
        last.ma120 = 115.0;
        assert!(!filter.predicate(&[], &last));
    }

    #[test]
    fn box_breakout_accepts_either_tag() {
        let last = blank(100.0);
        let filter = ScreenFilter::PriceBoxBreakout;
        assert!(filter.predicate(&[Tag::BollingerSqueeze], &last));
        assert!(filter.predicate(&[Tag::BreakoutUpperBand], &last));
        assert!(!filter.predicate(&[Tag::HealthyMomentum], &last));
    }

    #[test]
    fn deserialise_partial_state() {
        let state: FilterState = serde_json::from_str(r#"{ "psy_cold": true }"#).unwrap();
        assert!(state.trend_bullish);
        assert!(state.psy_cold);
        assert!(!state.rsi_bullish);
    }
}
