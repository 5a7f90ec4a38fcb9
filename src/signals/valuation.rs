// =============================================================================
// Valuation Ladder — P/E bands around an EPS estimate
// =============================================================================
//
//   eps    = price / pe_estimate          (2 decimals)
//   pe     = price / eps                  (2 decimals)
//   levels = eps * {12, 15, 20, 25, 28}   (1 decimal)
//
// The radar has no fundamentals feed, so the P/E estimate and dividend yield
// are drawn by the caller.
// =============================================================================

use serde::Serialize;

use super::swing::round2;

/// Named P/E multiples, cheapest first.
pub const PE_LADDER: [(&str, f64); 5] = [
    ("bargain", 12.0),
    ("cheap", 15.0),
    ("fair", 20.0),
    ("expensive", 25.0),
    ("euphoric", 28.0),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationLevel {
    pub label: &'static str,
    pub multiple: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub eps: f64,
    pub pe: f64,
    pub dividend_yield: f64,
    pub levels: Vec<ValuationLevel>,
}

impl Valuation {
    /// Label of the highest ladder level at or below `price`; `None` under
    /// the bargain level.
    pub fn zone(&self, price: f64) -> Option<&'static str> {
        self.levels
            .iter()
            .take_while(|level| price >= level.price)
            .last()
            .map(|level| level.label)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the ladder for `price`.  A non-positive `pe_estimate` leaves EPS and
/// every level undefined.
pub fn value_ladder(price: f64, pe_estimate: f64, dividend_yield: f64) -> Valuation {
    let eps = if pe_estimate > 0.0 {
        round2(price / pe_estimate)
    } else {
        f64::NAN
    };
    let pe = if eps != 0.0 { round2(price / eps) } else { f64::NAN };

    let levels = PE_LADDER
        .iter()
        .map(|&(label, multiple)| ValuationLevel {
            label,
            multiple,
            price: round1(eps * multiple),
        })
        .collect();

    Valuation {
        eps,
        pe,
        dividend_yield: round2(dividend_yield),
        levels,
    }
}
