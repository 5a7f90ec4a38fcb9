// =============================================================================
// Technical Score — ordered rule table over the last two enriched records
// =============================================================================
//
// Score starts at 50.  Each rule is an independent object
// `{ name, tag, delta, predicate }` evaluated in table order against the same
// `(last, prev)` window; a firing rule appends its tag (if any) and adds its
// delta.  The sum is clamped to [0, 100].
//
//   rule                 tag                  delta
//   bullish_alignment    bullish-alignment     +20   close > MA20 > MA60 > MA120
//   bearish_alignment    -                     -10   close < MA20 < MA60
//   healthy_momentum     healthy-momentum      +10   50 < RSI14 < 70
//   rsi_overheated       rsi-overheated         -5   RSI14 > 75
//   oversold             oversold               +5   RSI14 < 30
//   macd_strengthening   macd-strengthening     +5   hist > 0 and hist > prev.hist
//   psy_overheated       psy-overheated          0   PSY12 > 75
//   psy_extreme_fear     psy-extreme-fear        0   PSY12 < 25
//   bollinger_squeeze    bollinger-squeeze      +5   band width < 0.10
//   breakout_upper_band  breakout-upper-band   +10   close > upper band
//
// Both alignment rules require MA20, MA60 and MA120 to be defined; the band
// rules require all three bands.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::swing::{plan_swing, SwingPlan};
use crate::enrichment::EnrichedCandle;
use crate::indicators::is_defined;

pub const BASE_SCORE: f64 = 50.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Categorical label attached by the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    BullishAlignment,
    HealthyMomentum,
    RsiOverheated,
    Oversold,
    MacdStrengthening,
    PsyOverheated,
    PsyExtremeFear,
    BollingerSqueeze,
    BreakoutUpperBand,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BullishAlignment => "bullish-alignment",
            Self::HealthyMomentum => "healthy-momentum",
            Self::RsiOverheated => "rsi-overheated",
            Self::Oversold => "oversold",
            Self::MacdStrengthening => "macd-strengthening",
            Self::PsyOverheated => "psy-overheated",
            Self::PsyExtremeFear => "psy-extreme-fear",
            Self::BollingerSqueeze => "bollinger-squeeze",
            Self::BreakoutUpperBand => "breakout-upper-band",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two most recent records of a series.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWindow<'a> {
    pub last: &'a EnrichedCandle,
    pub prev: Option<&'a EnrichedCandle>,
}

impl<'a> ScoreWindow<'a> {
    pub fn new(last: &'a EnrichedCandle, prev: Option<&'a EnrichedCandle>) -> Self {
        Self { last, prev }
    }

    /// Window over the tail of `series`; `None` for an empty series.
    pub fn from_series(series: &'a [EnrichedCandle]) -> Option<Self> {
        let (last, rest) = series.split_last()?;
        Some(Self::new(last, rest.last()))
    }
}

/// One entry of the rule table.
#[derive(Clone, Copy)]
pub struct ScoreRule {
    pub name: &'static str,
    pub tag: Option<Tag>,
    pub delta: f64,
    pub predicate: fn(&ScoreWindow<'_>) -> bool,
}

impl std::fmt::Debug for ScoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreRule")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("delta", &self.delta)
            .finish_non_exhaustive()
    }
}

/// A rule that fired, kept for auditing a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub name: String,
    pub tag: Option<Tag>,
    pub delta: f64,
}

/// Outcome of running a rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechScore {
    /// Clamped to [0, 100].
    pub tech_score: f64,
    pub raw_score: f64,
    pub tags: Vec<Tag>,
    pub contributions: Vec<RuleContribution>,
}

/// Full scoring output for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub tech_score: f64,
    pub tags: Vec<Tag>,
    pub swing: SwingPlan,
}

// =============================================================================
// Rule table
// =============================================================================

pub const STANDARD_RULES: &[ScoreRule] = &[
    ScoreRule {
        name: "bullish_alignment",
        tag: Some(Tag::BullishAlignment),
        delta: 20.0,
        predicate: bullish_alignment,
    },
    ScoreRule {
        name: "bearish_alignment",
        tag: None,
        delta: -10.0,
        predicate: bearish_alignment,
    },
    ScoreRule {
        name: "healthy_momentum",
        tag: Some(Tag::HealthyMomentum),
        delta: 10.0,
        predicate: healthy_momentum,
    },
    ScoreRule {
        name: "rsi_overheated",
        tag: Some(Tag::RsiOverheated),
        delta: -5.0,
        predicate: rsi_overheated,
    },
    ScoreRule {
        name: "oversold",
        tag: Some(Tag::Oversold),
        delta: 5.0,
        predicate: oversold,
    },
    ScoreRule {
        name: "macd_strengthening",
        tag: Some(Tag::MacdStrengthening),
        delta: 5.0,
        predicate: macd_strengthening,
    },
    ScoreRule {
        name: "psy_overheated",
        tag: Some(Tag::PsyOverheated),
        delta: 0.0,
        predicate: psy_overheated,
    },
    ScoreRule {
        name: "psy_extreme_fear",
        tag: Some(Tag::PsyExtremeFear),
        delta: 0.0,
        predicate: psy_extreme_fear,
    },
    ScoreRule {
        name: "bollinger_squeeze",
        tag: Some(Tag::BollingerSqueeze),
        delta: 5.0,
        predicate: bollinger_squeeze,
    },
    ScoreRule {
        name: "breakout_upper_band",
        tag: Some(Tag::BreakoutUpperBand),
        delta: 10.0,
        predicate: breakout_upper_band,
    },
];

fn long_mas_defined(c: &EnrichedCandle) -> bool {
    is_defined(c.ma20) && is_defined(c.ma60) && is_defined(c.ma120)
}

fn bands_defined(c: &EnrichedCandle) -> bool {
    is_defined(c.upper_band) && is_defined(c.lower_band) && is_defined(c.middle_band)
}

/// `close > MA20 > MA60 > MA120`, all defined.  The `trend_bullish` screen
/// reads the tag this produces.
fn bullish_alignment(w: &ScoreWindow<'_>) -> bool {
    let c = w.last;
    long_mas_defined(c) && c.close() > c.ma20 && c.ma20 > c.ma60 && c.ma60 > c.ma120
}

fn bearish_alignment(w: &ScoreWindow<'_>) -> bool {
    let c = w.last;
    long_mas_defined(c) && c.close() < c.ma20 && c.ma20 < c.ma60
}

fn healthy_momentum(w: &ScoreWindow<'_>) -> bool {
    let rsi = w.last.rsi14;
    is_defined(rsi) && rsi > 50.0 && rsi < 70.0
}

fn rsi_overheated(w: &ScoreWindow<'_>) -> bool {
    let rsi = w.last.rsi14;
    is_defined(rsi) && rsi > 75.0
}

fn oversold(w: &ScoreWindow<'_>) -> bool {
    let rsi = w.last.rsi14;
    is_defined(rsi) && rsi < 30.0
}

fn macd_strengthening(w: &ScoreWindow<'_>) -> bool {
    let Some(prev) = w.prev else {
        return false;
    };
    let hist = w.last.hist;
    is_defined(hist) && is_defined(prev.hist) && hist > 0.0 && hist > prev.hist
}

fn psy_overheated(w: &ScoreWindow<'_>) -> bool {
    let psy = w.last.psy12;
    is_defined(psy) && psy > 75.0
}

fn psy_extreme_fear(w: &ScoreWindow<'_>) -> bool {
    let psy = w.last.psy12;
    is_defined(psy) && psy < 25.0
}

fn bollinger_squeeze(w: &ScoreWindow<'_>) -> bool {
    bands_defined(w.last) && w.last.band_width() < 0.10
}

fn breakout_upper_band(w: &ScoreWindow<'_>) -> bool {
    bands_defined(w.last) && w.last.close() > w.last.upper_band
}

// =============================================================================
// Scorer
// =============================================================================

/// Evaluates a rule table against a window.
#[derive(Debug, Clone)]
pub struct TechScorer {
    rules: Vec<ScoreRule>,
}

impl TechScorer {
    pub fn new(rules: Vec<ScoreRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ScoreRule] {
        &self.rules
    }

    /// Run every rule in order and clamp the accumulated score.
    pub fn evaluate(&self, window: &ScoreWindow<'_>) -> TechScore {
        let mut raw_score = BASE_SCORE;
        let mut tags: Vec<Tag> = Vec::new();
        let mut contributions = Vec::new();

        for rule in &self.rules {
            if !(rule.predicate)(window) {
                continue;
            }
            raw_score += rule.delta;
            if let Some(tag) = rule.tag {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            contributions.push(RuleContribution {
                name: rule.name.to_string(),
                tag: rule.tag,
                delta: rule.delta,
            });
        }

        let tech_score = raw_score.clamp(MIN_SCORE, MAX_SCORE);

        debug!(
            date = %window.last.candle.date,
            raw_score,
            tech_score,
            fired = contributions.len(),
            "technical score evaluated"
        );

        TechScore {
            tech_score,
            raw_score,
            tags,
            contributions,
        }
    }
}

impl Default for TechScorer {
    fn default() -> Self {
        Self::new(STANDARD_RULES.to_vec())
    }
}

/// Score the `(last, prev)` window with the standard rules and derive the
/// swing plan from the clamped score.
pub fn score(last: &EnrichedCandle, prev: Option<&EnrichedCandle>) -> ScoreResult {
    let outcome = TechScorer::default().evaluate(&ScoreWindow::new(last, prev));
    let swing = plan_swing(last, outcome.tech_score);
    ScoreResult {
        tech_score: outcome.tech_score,
        tags: outcome.tags,
        swing,
    }
}

/// Score the tail of an enriched series; `None` when it is empty.
pub fn score_series(series: &[EnrichedCandle]) -> Option<ScoreResult> {
    let window = ScoreWindow::from_series(series)?;
    Some(score(window.last, window.prev))
}
