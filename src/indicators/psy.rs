// =============================================================================
// Psychological Line (PSY)
// =============================================================================
//
//   PSY_t = (number of up-closes among the last `period` transitions) / period * 100
//
// An up-close is close_j > close_{j-1}.  Undefined until `period` transitions
// exist, i.e. for i < period.

/// Compute the PSY series for `closes`.
pub fn calculate_psy(closes: &[f64], period: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; closes.len()];
    if period == 0 {
        return result;
    }

    for i in period..closes.len() {
        let up_days = (i + 1 - period..=i)
            .filter(|&j| closes[j] > closes[j - 1])
            .count();
        result[i] = up_days as f64 / period as f64 * 100.0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psy_undefined_before_period() {
        let closes: Vec<f64> = (1..=12).map(|x| x as f64).collect();
        let psy = calculate_psy(&closes, 12);
        assert!(psy.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn psy_all_up_is_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let psy = calculate_psy(&closes, 12);
        assert!(psy[11].is_nan());
        assert_eq!(psy[12], 100.0);
        assert_eq!(psy[29], 100.0);
    }

    #[test]
    fn psy_flat_is_zero() {
        let psy = calculate_psy(&[50.0; 30], 24);
        for &v in &psy[24..] {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn psy_counts_only_up_moves() {
        // up, down, up, up => 3 of 4
        let closes = vec![10.0, 11.0, 10.5, 11.0, 12.0];
        let psy = calculate_psy(&closes, 4);
        assert_eq!(psy[4], 75.0);
    }
}
