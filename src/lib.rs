// =============================================================================
// TW Stock Radar — technical-indicator engine over mock Taiwan stock data
// =============================================================================
//
// Layers, bottom-up:
//   indicators     → index-aligned series (NaN where undefined)
//   enrichment     → one record per candle carrying every indicator
//   signals        → technical score, tags, swing plan, recommendation
//   smart_filters  → named screening predicates
//   screener       → feed → enrichment → scoring → ranking → filtering
// =============================================================================

pub mod enrichment;
pub mod indicators;
pub mod market_data;
pub mod runtime_config;
pub mod screener;
pub mod signals;
pub mod smart_filters;
pub mod types;
