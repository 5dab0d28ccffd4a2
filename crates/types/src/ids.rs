//! Core identifier types for the coupon system.

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Cash scale factor: 100 means 2 decimal places.
/// - `100` = 1.00 kr
/// - `1` = 0.01 kr (smallest increment)
pub const CASH_SCALE: i64 = 100;

// =============================================================================
// Core ID Types
// =============================================================================

/// Unique identifier for a match within a betting round.
#[derive(
    Debug,
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
    From,
    Into,
)]
pub struct MatchId(pub u32);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match#{}", self.0)
    }
}
