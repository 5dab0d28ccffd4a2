//! Covering-code reduction: greedy maximum-coverage row selection.
//!
//! Exact minimum covering codes are intractable at production sizes, so
//! the reducer runs a bounded greedy heuristic: repeatedly pick the
//! uncovered point that covers the most uncovered points within the
//! covering radius, until the row budget is spent or everything is
//! covered. The guarantee this produces is advisory, not certified.
//!
//! Determinism is a hard requirement: ties are always broken by smallest
//! ordinal index, so the same inputs yield byte-identical key rows.

use crate::space::DigitVector;
use tracing::warn;

/// Caller-supplied ceiling on reduction work.
///
/// The greedy loop is O(rows^2 * dimension) in the worst case. When the
/// estimated work exceeds `max_ops` the reducer degrades to identity
/// reduction (truncating the full space) instead of running hot.
#[derive(Debug, Clone, Copy)]
pub struct ReduceLimits {
    /// Upper bound on estimated distance evaluations.
    pub max_ops: u64,
}

impl Default for ReduceLimits {
    fn default() -> Self {
        Self {
            max_ops: 50_000_000,
        }
    }
}

/// The outcome of reducing a full space to a row budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRowSet {
    /// Selected key rows, in selection order.
    pub rows: Vec<DigitVector>,
    /// Ordinal indices of full-space points left uncovered, or `None`
    /// when the reduction degraded and coverage was not evaluated.
    pub uncovered: Option<Vec<u64>>,
    /// True when the op ceiling forced identity reduction.
    pub degraded: bool,
}

impl KeyRowSet {
    /// True when coverage was evaluated and no point was missed.
    pub fn is_fully_covered(&self) -> bool {
        matches!(self.uncovered.as_deref(), Some([]))
    }

    /// Number of selected rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Reduce a full space to at most `row_budget` rows such that (per the
/// greedy heuristic) every point lies within `radius` of a selected row.
///
/// - Budget at or above the space size returns the space unchanged.
/// - An emptied uncovered set stops early: fewer rows than the budget.
/// - A spent budget reports the remaining uncovered ordinals explicitly.
/// - Estimated work above `limits.max_ops` degrades to identity reduction.
pub fn reduce(
    space: &[DigitVector],
    row_budget: u32,
    radius: usize,
    limits: &ReduceLimits,
) -> KeyRowSet {
    let n = space.len();
    if row_budget as usize >= n {
        return KeyRowSet {
            rows: space.to_vec(),
            uncovered: Some(Vec::new()),
            degraded: false,
        };
    }

    let dims = space.first().map(DigitVector::len).unwrap_or(0);
    let estimated_ops = (n as u64).saturating_mul(n as u64).saturating_mul(dims as u64);
    if estimated_ops > limits.max_ops {
        warn!(
            space = n,
            budget = row_budget,
            estimated_ops,
            "covering reduction over op ceiling, truncating full space"
        );
        return KeyRowSet {
            rows: space[..row_budget as usize].to_vec(),
            uncovered: None,
            degraded: true,
        };
    }

    let mut rows = Vec::with_capacity(row_budget as usize);
    let mut uncovered: Vec<usize> = (0..n).collect();

    while rows.len() < row_budget as usize && !uncovered.is_empty() {
        // Candidates are the uncovered points themselves. Ascending index
        // iteration with a strict improvement test breaks ties toward the
        // smallest ordinal.
        let mut best = uncovered[0];
        let mut best_count = 0usize;
        for &candidate in &uncovered {
            let count = uncovered
                .iter()
                .filter(|&&point| space[candidate].hamming_distance(&space[point]) <= radius)
                .count();
            if count > best_count {
                best = candidate;
                best_count = count;
            }
        }

        rows.push(space[best].clone());
        uncovered.retain(|&point| space[best].hamming_distance(&space[point]) > radius);
    }

    KeyRowSet {
        rows,
        uncovered: Some(uncovered.into_iter().map(|point| point as u64).collect()),
        degraded: false,
    }
}
