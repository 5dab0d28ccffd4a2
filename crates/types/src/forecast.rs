//! Per-match prediction signals consumed from the external predictor.
//!
//! Forecasts are opaque inputs: the coupon pipeline never computes
//! probabilities itself, it only orders and partitions matches by the
//! signal values carried here.

use crate::ids::MatchId;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// How much weight the upstream model puts behind its own forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

/// Prediction signal for a single match.
///
/// `expected_value` is a signed percentage: positive means the leading
/// outcome is priced better than the market consensus, negative worse.
/// `candidates` lists outcomes in descending model preference and is the
/// source for two-way hedge pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchForecast {
    /// Match this forecast applies to.
    pub match_id: MatchId,
    /// The model's most likely outcome.
    pub leading: Outcome,
    /// Outcomes in descending preference order (leading first).
    pub candidates: Vec<Outcome>,
    /// Signed expected-value percentage for the leading outcome.
    pub expected_value: f64,
    /// Whether the model considers this match safe as a single pick.
    pub single_suitable: bool,
    /// Confidence tier reported by the model.
    pub confidence: ConfidenceTier,
}

impl MatchForecast {
    /// Create a forecast with neutral defaults for the given match.
    pub fn new(match_id: MatchId, leading: Outcome) -> Self {
        Self {
            match_id,
            leading,
            candidates: vec![leading],
            expected_value: 0.0,
            single_suitable: false,
            confidence: ConfidenceTier::Medium,
        }
    }

    /// Set the expected-value percentage.
    pub fn with_expected_value(mut self, ev: f64) -> Self {
        self.expected_value = ev;
        self
    }

    /// Set the candidate outcome ordering.
    pub fn with_candidates(mut self, candidates: Vec<Outcome>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Mark the match as suitable for a single pick.
    pub fn single_suitable(mut self) -> Self {
        self.single_suitable = true;
        self
    }

    /// Set the confidence tier.
    pub fn with_confidence(mut self, confidence: ConfidenceTier) -> Self {
        self.confidence = confidence;
        self
    }
}
