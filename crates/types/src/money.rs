//! Fixed-point monetary type for stakes and coupon costs.
//!
//! All monetary values use fixed-point arithmetic with 2 decimal places
//! to avoid floating-point precision issues in cost accounting.

use crate::ids::CASH_SCALE;
use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Fixed-point cash amount with 2 decimal places.
///
/// # Examples
/// - `Cash(100)` = 1.00 kr
/// - `Cash(150)` = 1.50 kr
/// - `Cash(1)` = 0.01 kr
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Cash(pub i64);

impl Cash {
    pub const ZERO: Cash = Cash(0);

    /// Create from a float amount in whole currency units.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self((v * CASH_SCALE as f64).round() as i64)
    }

    /// Convert to a float amount in whole currency units.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / CASH_SCALE as f64
    }

    /// Get the raw fixed-point value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the amount is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Mul<u64> for Cash {
    type Output = Cash;

    /// Multiply a per-row stake by a row count to get a total cost.
    fn mul(self, count: u64) -> Cash {
        Cash(self.0 * count as i64)
    }
}

impl fmt::Debug for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cash({:.2} kr)", self.to_float())
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kr", self.to_float())
    }
}
