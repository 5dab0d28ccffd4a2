//! Cost and expected-value summary of a finished coupon.

use crate::row::CouponRow;
use serde::Serialize;
use types::{Cash, MatchForecast};

/// Handoff summary for persistence and presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponSummary {
    /// Number of playable rows.
    pub row_count: usize,
    /// Total cost: rows x stake per row.
    pub total_cost: Cash,
    /// Mean of the per-match expected values, in signed percent.
    pub mean_expected_value: f64,
}

/// Summarize a row set against the round's forecasts.
pub fn summarize(rows: &[CouponRow], forecasts: &[MatchForecast], stake: Cash) -> CouponSummary {
    let mean_expected_value = if forecasts.is_empty() {
        0.0
    } else {
        forecasts.iter().map(|f| f.expected_value).sum::<f64>() / forecasts.len() as f64
    };
    CouponSummary {
        row_count: rows.len(),
        total_cost: stake * rows.len() as u64,
        mean_expected_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{MatchId, Outcome};

    #[test]
    fn test_summary_cost_and_mean_ev() {
        let rows = vec![
            CouponRow(vec![Outcome::Home]),
            CouponRow(vec![Outcome::Draw]),
        ];
        let forecasts = vec![
            MatchForecast::new(MatchId(1), Outcome::Home).with_expected_value(4.0),
            MatchForecast::new(MatchId(2), Outcome::Draw).with_expected_value(-2.0),
        ];
        let summary = summarize(&rows, &forecasts, Cash::from_float(1.0));
        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.total_cost, Cash::from_float(2.0));
        assert_eq!(summary.mean_expected_value, 1.0);
    }
}
