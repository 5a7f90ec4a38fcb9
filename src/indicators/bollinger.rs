// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), with σ the population standard deviation of
// the same window.  The band width is the normalised distance
//   BBW = (upper - lower) / middle
// expressed as a ratio (0.10 == 10 %).  BBW drives the squeeze tag.

use super::sma::calculate_sma;

/// Index-aligned Bollinger series.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
    pub width: Vec<f64>,
}

/// Calculate Bollinger Bands for the given closing prices.
///
/// Every output is NaN wherever the SMA is NaN (`i < period - 1`).  A zero
/// middle band yields a non-finite width rather than an error.
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerSeries {
    let middle = calculate_sma(closes, period);
    let len = closes.len();

    let mut upper = vec![f64::NAN; len];
    let mut lower = vec![f64::NAN; len];
    let mut width = vec![f64::NAN; len];

    for i in 0..len {
        let mean = middle[i];
        if mean.is_nan() {
            continue;
        }

        let window = &closes[i + 1 - period..=i];
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();

        upper[i] = mean + num_std * std_dev;
        lower[i] = mean - num_std * std_dev;
        width[i] = (upper[i] - lower[i]) / mean;
    }

    BollingerSeries {
        upper,
        middle,
        lower,
        width,
    }
}
