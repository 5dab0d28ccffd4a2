//! Hedge assignment resolution.
//!
//! Two strategies behind one validation gate:
//! 1. Ask the predictor (when one is injected) and validate its proposal.
//! 2. Fall back to a deterministic split driven by the forecast signals.
//!
//! Every predictor failure and every invalid proposal resolves to the
//! fallback; the only caller-visible error is an infeasible shape.

use crate::assignment::{HedgeAssignment, SinglePick, TwoWayHedge};
use crate::predictor::{HedgeCategory, HedgeProposal, Predictor};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::warn;
use types::{MatchForecast, MatchId, Outcome, ShapeError, SystemShape};

/// Why a predictor proposal was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProposalRejection {
    #[error("match {0} missing from proposal")]
    MissingMatch(MatchId),

    #[error("match {0} proposed more than once")]
    DuplicateMatch(MatchId),

    #[error("proposal names unknown match {0}")]
    UnknownMatch(MatchId),

    #[error("proposal has {got} three-way hedges, shape requires {want}")]
    ThreeWayCount { got: usize, want: usize },

    #[error("proposal has {got} two-way hedges, shape requires {want}")]
    TwoWayCount { got: usize, want: usize },

    #[error("two-way hedge on {0} repeats one symbol")]
    DegenerateTwoWay(MatchId),
}

/// Resolve a round into a validated hedge assignment.
///
/// The predictor is consulted first when present; its proposal must pass
/// [`validate_proposal`] exactly or it is discarded. The deterministic
/// fallback always succeeds, so the contract is a fully partitioned
/// assignment or a [`ShapeError`] for an infeasible shape.
pub fn resolve(
    forecasts: &[MatchForecast],
    shape: &SystemShape,
    predictor: Option<&dyn Predictor>,
) -> Result<HedgeAssignment, ShapeError> {
    shape.validate(forecasts.len())?;

    if let Some(predictor) = predictor {
        match predictor.propose(forecasts, shape) {
            Ok(proposal) => match validate_proposal(&proposal, forecasts, shape) {
                Ok(assignment) => return Ok(assignment),
                Err(rejection) => {
                    warn!(%rejection, "discarding predictor proposal, using fallback");
                }
            },
            Err(error) => {
                warn!(%error, "predictor failed, using fallback");
            }
        }
    }

    Ok(fallback_assignment(forecasts, shape))
}

/// Validate a predictor proposal against the shape and the round.
///
/// Accepts only an exact partition: every match assigned exactly once,
/// three-way and two-way counts matching the shape, and two-way pairs
/// naming two distinct symbols. The assignment is rebuilt in draw order
/// regardless of proposal order, so digit mapping stays stable.
pub fn validate_proposal(
    proposal: &HedgeProposal,
    forecasts: &[MatchForecast],
    shape: &SystemShape,
) -> Result<HedgeAssignment, ProposalRejection> {
    let known: HashSet<MatchId> = forecasts.iter().map(|f| f.match_id).collect();
    let mut categories: HashMap<MatchId, HedgeCategory> = HashMap::new();

    for pick in &proposal.picks {
        if !known.contains(&pick.match_id) {
            return Err(ProposalRejection::UnknownMatch(pick.match_id));
        }
        if categories.insert(pick.match_id, pick.category).is_some() {
            return Err(ProposalRejection::DuplicateMatch(pick.match_id));
        }
        if let HedgeCategory::TwoWay(a, b) = pick.category {
            if a == b {
                return Err(ProposalRejection::DegenerateTwoWay(pick.match_id));
            }
        }
    }

    let mut assignment = HedgeAssignment {
        singles: Vec::new(),
        three_way: Vec::new(),
        two_way: Vec::new(),
    };
    for forecast in forecasts {
        match categories.get(&forecast.match_id) {
            None => return Err(ProposalRejection::MissingMatch(forecast.match_id)),
            Some(HedgeCategory::Single(symbol)) => assignment.singles.push(SinglePick {
                match_id: forecast.match_id,
                symbol: *symbol,
            }),
            Some(HedgeCategory::ThreeWay) => assignment.three_way.push(forecast.match_id),
            Some(HedgeCategory::TwoWay(a, b)) => assignment.two_way.push(TwoWayHedge {
                match_id: forecast.match_id,
                symbols: [*a, *b],
            }),
        }
    }

    let want_three = shape.three_way as usize;
    if assignment.three_way.len() != want_three {
        return Err(ProposalRejection::ThreeWayCount {
            got: assignment.three_way.len(),
            want: want_three,
        });
    }
    let want_two = shape.two_way as usize;
    if assignment.two_way.len() != want_two {
        return Err(ProposalRejection::TwoWayCount {
            got: assignment.two_way.len(),
            want: want_two,
        });
    }

    Ok(assignment)
}

/// Deterministic assignment from the forecast signals alone.
///
/// Matches are stable-sorted single-suitable first, then expected value
/// descending; the first `total - h - v` become singles fixed to their
/// leading outcome. The remainder is stable-sorted by ascending expected
/// value (most uncertain first); the first `h` are hedged three ways, the
/// rest two ways. Stability makes equal signals fall back to draw order.
///
/// The shape must already be validated against the round; [`resolve`]
/// does that before calling here.
pub fn fallback_assignment(forecasts: &[MatchForecast], shape: &SystemShape) -> HedgeAssignment {
    let singles_count = shape.singles(forecasts.len());

    let mut by_safety: Vec<&MatchForecast> = forecasts.iter().collect();
    by_safety.sort_by(|a, b| {
        b.single_suitable
            .cmp(&a.single_suitable)
            .then(b.expected_value.total_cmp(&a.expected_value))
    });
    let (single_refs, hedged_refs) = by_safety.split_at(singles_count);

    let mut by_uncertainty: Vec<&MatchForecast> = hedged_refs.to_vec();
    by_uncertainty.sort_by(|a, b| a.expected_value.total_cmp(&b.expected_value));

    let single_ids: HashSet<MatchId> = single_refs.iter().map(|f| f.match_id).collect();
    let three_way_ids: HashSet<MatchId> = by_uncertainty[..shape.three_way as usize]
        .iter()
        .map(|f| f.match_id)
        .collect();

    // Rebuild in draw order so digit mapping is independent of signal order.
    let mut assignment = HedgeAssignment {
        singles: Vec::with_capacity(singles_count),
        three_way: Vec::with_capacity(shape.three_way as usize),
        two_way: Vec::with_capacity(shape.two_way as usize),
    };
    for forecast in forecasts {
        if single_ids.contains(&forecast.match_id) {
            assignment.singles.push(SinglePick {
                match_id: forecast.match_id,
                symbol: forecast.leading,
            });
        } else if three_way_ids.contains(&forecast.match_id) {
            assignment.three_way.push(forecast.match_id);
        } else {
            assignment.two_way.push(TwoWayHedge {
                match_id: forecast.match_id,
                symbols: two_way_pair(forecast),
            });
        }
    }
    assignment
}

/// The two symbols a two-way hedge covers for a forecast: the leading
/// outcome plus the first differing candidate, with a fixed canonical
/// default when the forecast carries no usable alternative.
pub fn two_way_pair(forecast: &MatchForecast) -> [Outcome; 2] {
    let second = forecast
        .candidates
        .iter()
        .copied()
        .find(|&candidate| candidate != forecast.leading);
    let second = match second {
        Some(candidate) => candidate,
        None if forecast.leading == Outcome::Home => Outcome::Draw,
        None => Outcome::Home,
    };
    [forecast.leading, second]
}
