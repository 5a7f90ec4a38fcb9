// =============================================================================
// Shared types used across the radar
// =============================================================================

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Bar size of a candle series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    Min1,
    #[serde(rename = "5m")]
    Min5,
    #[serde(rename = "10m")]
    Min10,
    #[serde(rename = "15m")]
    Min15,
    #[serde(rename = "30m")]
    Min30,
    #[serde(rename = "60m")]
    Min60,
    #[serde(rename = "D")]
    Day,
    #[serde(rename = "W")]
    Week,
    #[serde(rename = "M")]
    Month,
}

impl Timeframe {
    pub fn is_intraday(self) -> bool {
        self.minutes().is_some()
    }

    fn minutes(self) -> Option<i64> {
        match self {
            Self::Min1 => Some(1),
            Self::Min5 => Some(5),
            Self::Min10 => Some(10),
            Self::Min15 => Some(15),
            Self::Min30 => Some(30),
            Self::Min60 => Some(60),
            Self::Day | Self::Week | Self::Month => None,
        }
    }

    /// Per-bar relative volatility used by the mock random walk.
    pub fn volatility(self) -> f64 {
        match self {
            Self::Week => 0.05,
            Self::Month => 0.10,
            Self::Day => 0.02,
            _ => 0.005,
        }
    }

    /// Wall-clock length of one bar. A month is approximated as 30 days.
    pub fn bar_duration(self) -> Duration {
        match self {
            Self::Day => Duration::days(1),
            Self::Week => Duration::days(7),
            Self::Month => Duration::days(30),
            _ => Duration::minutes(self.minutes().unwrap_or(1)),
        }
    }

    /// Number of bars shown for a freshly generated series.
    pub fn default_history_len(self) -> usize {
        if self.is_intraday() {
            300
        } else {
            200
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::Day
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Min1 => "1m",
            Self::Min5 => "5m",
            Self::Min10 => "10m",
            Self::Min15 => "15m",
            Self::Min30 => "30m",
            Self::Min60 => "60m",
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
        };
        write!(f, "{label}")
    }
}

/// Main-force sentiment bracket of a swing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "Strong Buy"),
            Self::Buy => write!(f, "Buy"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// Headline call derived from the technical score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Neutral,
    Sell,
}

impl Default for Recommendation {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_serde_uses_short_labels() {
        let tf: Timeframe = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(tf, Timeframe::Min15);
        assert_eq!(serde_json::to_string(&Timeframe::Week).unwrap(), "\"W\"");
        assert_eq!(Timeframe::Min60.to_string(), "60m");
    }

    #[test]
    fn intraday_frames_are_longer_and_calmer() {
        assert!(Timeframe::Min5.is_intraday());
        assert!(!Timeframe::Day.is_intraday());
        assert_eq!(Timeframe::Min5.default_history_len(), 300);
        assert_eq!(Timeframe::Month.default_history_len(), 200);
        assert!(Timeframe::Min5.volatility() < Timeframe::Day.volatility());
        assert_eq!(Timeframe::Min15.bar_duration(), Duration::minutes(15));
        assert_eq!(Timeframe::Week.bar_duration(), Duration::days(7));
    }

    #[test]
    fn recommendation_serialises_uppercase() {
        assert_eq!(serde_json::to_string(&Recommendation::Sell).unwrap(), "\"SELL\"");
        assert_eq!(Recommendation::default(), Recommendation::Neutral);
    }
}
