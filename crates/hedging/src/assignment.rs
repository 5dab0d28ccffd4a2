//! Validated hedge assignments: the partition of a round into categories.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use types::{MatchId, Outcome, SystemShape};

/// A match fixed to one outcome across every coupon row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePick {
    pub match_id: MatchId,
    pub symbol: Outcome,
}

/// A match covering exactly two of the three outcomes.
///
/// Array order matters: binary digit 0 selects `symbols[0]`, digit 1
/// selects `symbols[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoWayHedge {
    pub match_id: MatchId,
    pub symbols: [Outcome; 2],
}

/// A full partition of a round's matches into hedge categories.
///
/// The vectors are kept in draw order within each category; that order
/// defines which digit-vector position maps to which match, so it must
/// never be re-sorted after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgeAssignment {
    pub singles: Vec<SinglePick>,
    pub three_way: Vec<MatchId>,
    pub two_way: Vec<TwoWayHedge>,
}

impl HedgeAssignment {
    /// Total matches covered by the assignment.
    pub fn total_matches(&self) -> usize {
        self.singles.len() + self.three_way.len() + self.two_way.len()
    }

    /// Check the exact-count invariants against a shape.
    pub fn matches_shape(&self, shape: &SystemShape, total_matches: usize) -> bool {
        self.three_way.len() == shape.three_way as usize
            && self.two_way.len() == shape.two_way as usize
            && self.singles.len() == shape.singles(total_matches)
    }

    /// Check that the categories are pairwise disjoint and jointly cover
    /// exactly the given match set.
    pub fn is_partition_of(&self, match_ids: &[MatchId]) -> bool {
        let mut seen = HashSet::new();
        for id in self.match_ids() {
            if !seen.insert(id) {
                return false;
            }
        }
        let expected: HashSet<MatchId> = match_ids.iter().copied().collect();
        seen == expected && self.total_matches() == match_ids.len()
    }

    /// All assigned match ids, singles then three-way then two-way.
    pub fn match_ids(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.singles
            .iter()
            .map(|s| s.match_id)
            .chain(self.three_way.iter().copied())
            .chain(self.two_way.iter().map(|t| t.match_id))
    }

    /// The fixed symbol of a single pick, if the match is one.
    pub fn single_symbol(&self, match_id: MatchId) -> Option<Outcome> {
        self.singles
            .iter()
            .find(|s| s.match_id == match_id)
            .map(|s| s.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HedgeAssignment {
        HedgeAssignment {
            singles: vec![SinglePick {
                match_id: MatchId(1),
                symbol: Outcome::Home,
            }],
            three_way: vec![MatchId(2)],
            two_way: vec![TwoWayHedge {
                match_id: MatchId(3),
                symbols: [Outcome::Home, Outcome::Draw],
            }],
        }
    }

    #[test]
    fn test_is_partition_of_exact_set() {
        let assignment = sample();
        assert!(assignment.is_partition_of(&[MatchId(1), MatchId(2), MatchId(3)]));
        assert!(!assignment.is_partition_of(&[MatchId(1), MatchId(2)]));
        assert!(!assignment.is_partition_of(&[MatchId(1), MatchId(2), MatchId(4)]));
    }

    #[test]
    fn test_duplicate_assignment_is_not_a_partition() {
        let mut assignment = sample();
        assignment.three_way.push(MatchId(1)); // Already a single
        assert!(!assignment.is_partition_of(&[MatchId(1), MatchId(2), MatchId(3)]));
    }

    #[test]
    fn test_matches_shape_counts() {
        let assignment = sample();
        let shape = SystemShape::new(1, 1, 6, 3);
        assert!(assignment.matches_shape(&shape, 3));
        assert!(!assignment.matches_shape(&SystemShape::new(2, 0, 9, 3), 3));
    }
}
