//! System shapes: the hedge-count and budget parameters of a betting system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for invalid or inconsistent system shapes.
///
/// These are fatal: a bad shape is surfaced to the caller and never
/// auto-corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// More hedged positions than matches in the round.
    #[error("hedged positions ({hedged}) exceed match count ({total})")]
    HedgesExceedMatches { hedged: usize, total: usize },

    /// The row budget is larger than the full hedge space.
    #[error("row budget {budget} exceeds the full space of {space} rows")]
    BudgetExceedsSpace { budget: u32, space: u64 },

    /// The guarantee level cannot exceed the match count.
    #[error("guarantee level {guarantee} exceeds match count ({total})")]
    GuaranteeExceedsMatches { guarantee: u8, total: usize },

    /// 3^h * 2^v does not fit in the index space.
    #[error("hedge shape {three_way}+{two_way} overflows the index space")]
    SpaceOverflow { three_way: u8, two_way: u8 },
}

/// The hedge-count and budget parameters of a betting system.
///
/// A shape is immutable and, together with the covering radius derived
/// from it, identifies a cacheable key-row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemShape {
    /// Number of three-way hedged matches (h).
    pub three_way: u8,
    /// Number of two-way hedged matches (v).
    pub two_way: u8,
    /// Maximum number of coupon rows the system may produce.
    pub row_budget: u32,
    /// Claimed minimum correct-match count across the whole coupon.
    pub guarantee_level: u8,
}

impl SystemShape {
    /// Create a new shape. Use [`SystemShape::validate`] before computing
    /// with it.
    pub fn new(three_way: u8, two_way: u8, row_budget: u32, guarantee_level: u8) -> Self {
        Self {
            three_way,
            two_way,
            row_budget,
            guarantee_level,
        }
    }

    /// Total hedged positions (h + v), the digit-vector dimension.
    #[inline]
    pub fn hedged_positions(self) -> usize {
        self.three_way as usize + self.two_way as usize
    }

    /// Size of the full hedge space: 3^h * 2^v.
    pub fn space_size(self) -> Result<u64, ShapeError> {
        let overflow = ShapeError::SpaceOverflow {
            three_way: self.three_way,
            two_way: self.two_way,
        };
        let ternary = 3u64.checked_pow(self.three_way as u32).ok_or(overflow)?;
        let binary = 2u64.checked_pow(self.two_way as u32).ok_or(overflow)?;
        ternary.checked_mul(binary).ok_or(overflow)
    }

    /// Number of single picks left over in a round of `total_matches`.
    #[inline]
    pub fn singles(self, total_matches: usize) -> usize {
        total_matches - self.hedged_positions()
    }

    /// Check the shape invariants against a round of `total_matches`.
    pub fn validate(self, total_matches: usize) -> Result<(), ShapeError> {
        let hedged = self.hedged_positions();
        if hedged > total_matches {
            return Err(ShapeError::HedgesExceedMatches {
                hedged,
                total: total_matches,
            });
        }
        if self.guarantee_level as usize > total_matches {
            return Err(ShapeError::GuaranteeExceedsMatches {
                guarantee: self.guarantee_level,
                total: total_matches,
            });
        }
        let space = self.space_size()?;
        if self.row_budget as u64 > space {
            return Err(ShapeError::BudgetExceedsSpace {
                budget: self.row_budget,
                space,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_size() {
        assert_eq!(SystemShape::new(3, 2, 1, 13).space_size(), Ok(108));
        assert_eq!(SystemShape::new(0, 0, 1, 13).space_size(), Ok(1));
    }

    #[test]
    fn test_space_size_overflow() {
        let shape = SystemShape::new(200, 0, 1, 13);
        assert!(matches!(
            shape.space_size(),
            Err(ShapeError::SpaceOverflow { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_excess_hedges() {
        let shape = SystemShape::new(10, 4, 1, 13);
        assert_eq!(
            shape.validate(13),
            Err(ShapeError::HedgesExceedMatches {
                hedged: 14,
                total: 13
            })
        );
    }

    #[test]
    fn test_validate_rejects_budget_over_space() {
        let shape = SystemShape::new(2, 0, 10, 8);
        assert_eq!(
            shape.validate(13),
            Err(ShapeError::BudgetExceedsSpace {
                budget: 10,
                space: 9
            })
        );
    }

    #[test]
    fn test_validate_rejects_guarantee_over_total() {
        let shape = SystemShape::new(2, 0, 9, 14);
        assert!(matches!(
            shape.validate(13),
            Err(ShapeError::GuaranteeExceedsMatches { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_standard_shapes() {
        assert_eq!(SystemShape::new(3, 2, 36, 12).validate(13), Ok(()));
        assert_eq!(SystemShape::new(2, 2, 12, 7).validate(8), Ok(()));
    }
}
