// =============================================================================
// Listed stock universe — popular Taiwan tickers with reference prices
// =============================================================================

use serde::Serialize;

/// A ticker the radar knows by name, with an approximate recent price used to
/// calibrate generated histories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListedStock {
    pub code: &'static str,
    pub name: &'static str,
    pub ref_price: f64,
}

const fn listed(code: &'static str, name: &'static str, ref_price: f64) -> ListedStock {
    ListedStock {
        code,
        name,
        ref_price,
    }
}

pub const LISTED_STOCKS: &[ListedStock] = &[
    listed("2330", "台積電", 1040.0),
    listed("2317", "鴻海", 205.0),
    listed("2454", "聯發科", 1250.0),
    listed("2303", "聯電", 53.0),
    listed("2308", "台達電", 395.0),
    listed("2382", "廣達", 280.0),
    listed("3231", "緯創", 108.0),
    listed("6669", "緯穎", 2450.0),
    listed("3711", "日月光投控", 155.0),
    listed("3008", "大立光", 2750.0),
    listed("3034", "聯詠", 530.0),
    listed("2379", "瑞昱", 490.0),
    listed("3037", "欣興", 175.0),
    listed("2357", "華碩", 580.0),
    listed("2353", "宏碁", 42.0),
    listed("2603", "長榮", 215.0),
    listed("2609", "陽明", 72.0),
    listed("2615", "萬海", 88.0),
    listed("2618", "長榮航", 36.0),
    listed("2610", "華航", 22.0),
    listed("2881", "富邦金", 92.0),
    listed("2882", "國泰金", 66.0),
    listed("2891", "中信金", 36.0),
    listed("2886", "兆豐金", 41.0),
    listed("2884", "玉山金", 28.5),
    listed("5880", "合庫金", 26.5),
    listed("1301", "台塑", 48.0),
    listed("1303", "南亞", 43.0),
    listed("1326", "台化", 39.0),
    listed("6505", "台塑化", 52.0),
    listed("2002", "中鋼", 22.5),
    listed("1101", "台泥", 32.0),
    listed("1102", "亞泥", 45.0),
    listed("2207", "和泰車", 680.0),
    listed("2912", "統一超", 285.0),
    listed("1216", "統一", 86.0),
    listed("9910", "豐泰", 155.0),
    listed("9921", "巨大", 195.0),
    listed("0050", "元大台灣50", 58.5),
    listed("0056", "元大高股息", 39.0),
    listed("00878", "國泰永續高股息", 23.0),
    listed("00929", "復華台灣科技優息", 19.5),
    listed("00919", "群益台灣精選高息", 24.0),
];

const MAX_SUGGESTIONS: usize = 8;

/// Resolve a code such as `2330` or `2330.TW` to its listing.
pub fn find(code: &str) -> Option<&'static ListedStock> {
    LISTED_STOCKS
        .iter()
        .find(|s| s.code == code || code.contains(s.code))
}

/// Autocomplete candidates whose code or name contains `query`.
pub fn search_suggestions(query: &str) -> Vec<&'static ListedStock> {
    let q = query.trim().to_uppercase();
    if q.is_empty() {
        return Vec::new();
    }
    LISTED_STOCKS
        .iter()
        .filter(|s| s.code.contains(q.as_str()) || s.name.contains(q.as_str()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Canonical `XXXX.TW` form of a ticker.
pub fn normalize_code(code: &str) -> String {
    let code = code.trim().to_uppercase();
    match find(&code) {
        Some(listing) => format!("{}.TW", listing.code),
        None if code.ends_with(".TW") => code,
        None => format!("{code}.TW"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_accepts_suffixed_codes() {
        assert_eq!(find("2330").unwrap().name, "台積電");
        assert_eq!(find("2330.TW").unwrap().code, "2330");
        assert!(find("9999").is_none());
    }

    #[test]
    fn suggestions_match_code_or_name_and_cap_at_eight() {
        let by_code = search_suggestions("23");
        assert_eq!(by_code.len(), 8);
        assert!(by_code.iter().all(|s| s.code.contains("23")));

        let by_name = search_suggestions("金");
        assert!(by_name.iter().any(|s| s.code == "2881"));
        assert!(by_name.iter().all(|s| s.name.contains('金')));
    }

    #[test]
    fn suggestions_empty_query() {
        assert!(search_suggestions("   ").is_empty());
    }

    #[test]
    fn normalize_code_appends_suffix_once() {
        assert_eq!(normalize_code("2330"), "2330.TW");
        assert_eq!(normalize_code("2330.tw"), "2330.TW");
        assert_eq!(normalize_code("9999"), "9999.TW");
        assert_eq!(normalize_code("9999.TW"), "9999.TW");
    }
}
