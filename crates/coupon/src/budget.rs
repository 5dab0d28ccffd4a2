//! Budget degradation: collapse hedges until the coupon cost fits.
//!
//! This is a local greedy step over finished rows, independent of the
//! covering-code reduction: it never regenerates key rows, it only
//! narrows columns. Each step collapses the currently widest non-single
//! match (ties broken by original match order) to its leading symbol and
//! deduplicates rows, so the cost is monotonically non-increasing and
//! the loop terminates after at most one step per hedged match.

use crate::row::CouponRow;
use std::collections::HashSet;
use types::{Cash, Outcome};

/// Result of driving a row set under a cost ceiling.
///
/// An unreachable ceiling is not an error: the result carries the
/// minimum achievable cost with `within_ceiling` false and lets the
/// caller decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOutcome {
    /// Remaining rows after degradation.
    pub rows: Vec<CouponRow>,
    /// Final cost: rows x stake.
    pub total_cost: Cash,
    /// Whether the ceiling was met.
    pub within_ceiling: bool,
    /// Match positions collapsed to their leading symbol, in order.
    pub collapsed_positions: Vec<usize>,
}

/// Collapse hedged columns until `rows x stake <= ceiling` or nothing is
/// left to collapse.
///
/// `leading` holds each match position's leading symbol and drives what a
/// collapsed column is fixed to.
pub fn degrade_to_ceiling(
    rows: Vec<CouponRow>,
    leading: &[Outcome],
    stake: Cash,
    ceiling: Cash,
) -> BudgetOutcome {
    let mut rows = rows;
    let mut collapsed_positions = Vec::new();

    loop {
        let total_cost = stake * rows.len() as u64;
        if total_cost <= ceiling {
            return BudgetOutcome {
                rows,
                total_cost,
                within_ceiling: true,
                collapsed_positions,
            };
        }

        let Some(position) = widest_position(&rows) else {
            return BudgetOutcome {
                rows,
                total_cost,
                within_ceiling: false,
                collapsed_positions,
            };
        };

        for row in &mut rows {
            row.0[position] = leading[position];
        }
        dedupe_preserving_order(&mut rows);
        collapsed_positions.push(position);
    }
}

/// The position with the most distinct symbols across rows, lowest index
/// on ties; `None` when every column is already a single.
fn widest_position(rows: &[CouponRow]) -> Option<usize> {
    let columns = rows.first().map(CouponRow::len).unwrap_or(0);
    let mut best: Option<(usize, usize)> = None;
    for position in 0..columns {
        let width = rows
            .iter()
            .filter_map(|row| row.get(position))
            .collect::<HashSet<Outcome>>()
            .len();
        if width > 1 && best.map_or(true, |(_, w)| width > w) {
            best = Some((position, width));
        }
    }
    best.map(|(position, _)| position)
}

fn dedupe_preserving_order(rows: &mut Vec<CouponRow>) {
    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.clone()));
}
