pub mod candle;
pub mod feed;
pub mod universe;

// Re-export the core types for convenient access (e.g. `use crate::market_data::Candle`).
pub use candle::{closes, Candle};
pub use feed::{CandleSource, RandomWalkFeed, SeriesRequest, TrendFeed};
pub use universe::{ListedStock, LISTED_STOCKS};
