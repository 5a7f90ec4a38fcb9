// =============================================================================
// TW Stock Radar — Main Entry Point
// =============================================================================
//
// Loads the radar config, builds a mock universe (or the configured symbols),
// screens it and prints the ranked survivors as JSON on stdout.  Logs go to
// stderr so the output stays pipeable.
// =============================================================================

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tw_stock_radar::market_data::RandomWalkFeed;
use tw_stock_radar::runtime_config::{RadarConfig, DEFAULT_CONFIG_PATH};
use tw_stock_radar::screener::{screen, RadarRow, Screener};

fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        TW Stock Radar — Starting Up                     ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let config_path =
        std::env::var("RADAR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&config_path).exists() {
        RadarConfig::load(&config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            RadarConfig::default()
        })
    } else {
        // First run: write the defaults out so they can be edited.
        let defaults = RadarConfig::default();
        if let Err(e) = defaults.save(&config_path) {
            warn!(error = %e, "Failed to write default config");
        }
        defaults
    };
    config.apply_env_overrides();

    let seed = config.seed.unwrap_or_else(|| rand::random::<u64>());
    info!(
        seed,
        timeframe = %config.timeframe,
        universe_size = config.universe_size,
        filters = ?config.filters.enabled(),
        "Radar configured"
    );

    // ── 2. Build the universe ────────────────────────────────────────────
    let feed = RandomWalkFeed::new(seed, Local::now().naive_local());
    let mut screener = Screener::new(
        feed,
        seed,
        config.timeframe,
        config.effective_history_len(),
    );

    let stocks = if config.symbols.is_empty() {
        screener.universe(config.universe_size)
    } else {
        let mut found = screener.search(&config.symbols.join(","), &[]);
        found.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        found
    };

    // ── 3. Screen & report ───────────────────────────────────────────────
    let passed = screen(&stocks, &config.filters);
    info!(
        analysed = stocks.len(),
        passed = passed.len(),
        "Screen complete"
    );

    let rows: Vec<RadarRow<'_>> = passed.iter().map(|s| s.row()).collect();
    let json = serde_json::to_string_pretty(&rows).context("failed to serialise radar output")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write radar output")?;

    Ok(())
}
