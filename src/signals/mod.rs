// =============================================================================
// Signals Module
// =============================================================================
//
// Turns the tail of an enriched series into decisions:
// - Technical score and tags (ordered rule table, clamped 0–100)
// - Swing plan (entry / target / stop, sentiment bracket)
// - Recommendation and summary lines
// - Valuation ladder (P/E bands)

pub mod swing;
pub mod tech_score;
pub mod valuation;
pub mod verdict;

pub use swing::{plan_swing, SwingPlan};
pub use tech_score::{score, score_series, ScoreResult, ScoreRule, ScoreWindow, Tag, TechScorer};
pub use valuation::{value_ladder, Valuation, ValuationLevel};
pub use verdict::{recommend, summarize};
