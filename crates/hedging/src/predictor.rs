//! The injected predictor capability.
//!
//! The external prediction service is modeled as a single-operation trait
//! rather than a concrete network client, so the deterministic fallback
//! is testable in isolation. Implementations own their transport, their
//! timeout, and their cancellation; the resolver only sees the result.

use thiserror::Error;
use types::{MatchForecast, MatchId, Outcome, SystemShape};

/// Failures the predictor capability may report.
///
/// All of these are recoverable: the resolver falls back to the
/// deterministic strategy and the caller never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictorError {
    /// The service could not be reached.
    #[error("predictor unavailable: {0}")]
    Unavailable(String),

    /// The call exceeded the implementation's deadline.
    #[error("predictor call timed out")]
    TimedOut,

    /// The service answered with something unusable.
    #[error("predictor response invalid: {0}")]
    Invalid(String),
}

/// The hedge category a predictor proposes for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HedgeCategory {
    /// Fix the match to one outcome.
    Single(Outcome),
    /// Cover all three outcomes.
    ThreeWay,
    /// Cover exactly these two outcomes, in digit order.
    TwoWay(Outcome, Outcome),
}

/// One proposed category for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedPick {
    pub match_id: MatchId,
    pub category: HedgeCategory,
}

/// A full proposal from the predictor, one pick per match.
///
/// Proposals are untrusted input: the resolver validates the exact-count
/// and partition invariants before anything downstream sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HedgeProposal {
    pub picks: Vec<ProposedPick>,
}

impl HedgeProposal {
    /// Append one pick.
    pub fn push(&mut self, match_id: MatchId, category: HedgeCategory) {
        self.picks.push(ProposedPick { match_id, category });
    }
}

/// The external prediction capability.
pub trait Predictor {
    /// Propose a hedge category for every match of the round.
    fn propose(
        &self,
        forecasts: &[MatchForecast],
        shape: &SystemShape,
    ) -> Result<HedgeProposal, PredictorError>;
}
