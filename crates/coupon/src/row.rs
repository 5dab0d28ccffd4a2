//! A single coupon row: one outcome symbol per match.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::Outcome;

/// One playable row, ordered by match position within the round.
///
/// Displayed as the traditional sign string, e.g. `1X2X111X21122`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CouponRow(pub Vec<Outcome>);

impl CouponRow {
    /// The outcome at a match position.
    #[inline]
    pub fn get(&self, position: usize) -> Option<Outcome> {
        self.0.get(position).copied()
    }

    /// Number of matches in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the row covers no matches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The symbols as a slice.
    #[inline]
    pub fn symbols(&self) -> &[Outcome] {
        &self.0
    }

    /// The row rendered as a sign string.
    pub fn signs(&self) -> String {
        self.0.iter().map(|o| o.sign()).collect()
    }
}

impl fmt::Display for CouponRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            write!(f, "{}", outcome.sign())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs_rendering() {
        let row = CouponRow(vec![Outcome::Home, Outcome::Draw, Outcome::Away]);
        assert_eq!(row.signs(), "1X2");
        assert_eq!(row.to_string(), "1X2");
    }
}
