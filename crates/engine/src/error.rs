//! Caller-visible errors of the coupon pipeline.

use coupon::CouponError;
use thiserror::Error;
use types::{MatchId, ShapeError};

/// Errors surfaced by [`crate::CouponEngine::build`].
///
/// Predictor failures never appear here: they resolve to the
/// deterministic fallback inside the hedging crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested system id is not in the catalog.
    #[error("unknown system id `{0}`")]
    UnknownSystem(String),

    /// The system shape is invalid for the round.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// An extension references a match outside the round.
    #[error("extension references {0} which is not in the round")]
    UnknownMatch(MatchId),

    /// A partial extension carries no symbols.
    #[error("partial extension on {0} has no symbols")]
    EmptyExtension(MatchId),

    /// Key rows and assignment disagree (should not happen for catalog
    /// shapes; surfaced rather than silently corrected).
    #[error(transparent)]
    Coupon(#[from] CouponError),
}
