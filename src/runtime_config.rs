// =============================================================================
// Runtime Configuration — radar settings with atomic save
// =============================================================================
//
// Everything the host binary can tune lives here: the mock feed seed, the
// universe size and timeframe, the active screen filters and an optional
// explicit symbol list that replaces the random universe.
//
// Persistence uses an atomic tmp + rename pattern.  All fields carry
// `#[serde(default)]` so that an older or hand-written file with missing
// fields still loads.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::smart_filters::FilterState;
use crate::types::Timeframe;

pub const DEFAULT_CONFIG_PATH: &str = "radar_config.json";

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_universe_size() -> usize {
    30
}

// =============================================================================
// RadarConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Seed for the mock feed.  `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of distinct listed stocks in the generated universe.
    #[serde(default = "default_universe_size")]
    pub universe_size: usize,

    #[serde(default)]
    pub timeframe: Timeframe,

    /// Bars per generated history; the timeframe default when absent.
    #[serde(default)]
    pub history_len: Option<usize>,

    #[serde(default)]
    pub filters: FilterState,

    /// Explicit codes to analyse instead of a random universe.
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            seed: None,
            universe_size: default_universe_size(),
            timeframe: Timeframe::default(),
            history_len: None,
            filters: FilterState::default(),
            symbols: Vec::new(),
        }
    }
}

impl RadarConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// A missing file is an error so the caller can fall back to defaults
    /// with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read radar config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse radar config from {}", path.display()))?;

        info!(
            path = %path.display(),
            universe_size = config.universe_size,
            timeframe = %config.timeframe,
            symbols = ?config.symbols,
            "radar config loaded"
        );

        Ok(config)
    }

    /// Persist to `path` via a `.tmp` sibling and a rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise radar config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "radar config saved (atomic)");
        Ok(())
    }

    /// Apply `RADAR_SEED` and `RADAR_SYMBOLS` (comma separated) on top of the
    /// loaded values.  An unparseable seed is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("RADAR_SEED").ok().as_deref(),
            std::env::var("RADAR_SYMBOLS").ok().as_deref(),
        );
    }

    fn apply_overrides(&mut self, seed: Option<&str>, symbols: Option<&str>) {
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => warn!(value = raw, error = %e, "ignoring invalid RADAR_SEED"),
            }
        }

        if let Some(raw) = symbols {
            let parsed: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                self.symbols = parsed;
            }
        }
    }

    /// Bars per history after applying the timeframe default.
    pub fn effective_history_len(&self) -> usize {
        self.history_len
            .unwrap_or_else(|| self.timeframe.default_history_len())
    }
}
