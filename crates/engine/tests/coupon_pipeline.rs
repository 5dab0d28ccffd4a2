//! Integration tests for the full coupon pipeline.
//!
//! These drive the engine the way a betting-round caller would: a round
//! of forecasts, a catalog system, optionally a predictor, and assert
//! the contract properties end to end.

use engine::{CouponEngine, CouponRequest};
use hedging::{HedgeCategory, HedgeProposal, Predictor, PredictorError};
use types::{
    Cash, ConfidenceTier, CoverageExtension, MatchForecast, MatchId, Outcome, SystemCatalog,
    SystemShape,
};

/// A plausible 13-match round with varied signals.
fn standard_round() -> Vec<MatchForecast> {
    let leads = [
        Outcome::Home,
        Outcome::Home,
        Outcome::Draw,
        Outcome::Away,
        Outcome::Home,
        Outcome::Draw,
        Outcome::Home,
        Outcome::Away,
        Outcome::Home,
        Outcome::Draw,
        Outcome::Away,
        Outcome::Home,
        Outcome::Home,
    ];
    leads
        .iter()
        .enumerate()
        .map(|(i, &leading)| {
            let n = i as u32 + 1;
            let mut forecast = MatchForecast::new(MatchId(n), leading)
                .with_expected_value(6.0 - i as f64)
                .with_candidates(vec![leading, Outcome::Draw, Outcome::Away])
                .with_confidence(ConfidenceTier::Medium);
            if i % 3 == 0 {
                forecast = forecast.single_suitable();
            }
            forecast
        })
        .collect()
}

fn compact_round() -> Vec<MatchForecast> {
    standard_round().into_iter().take(8).collect()
}

#[test]
fn test_reduced_system_13_matches_has_8_singles() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(&standard_round(), &CouponRequest::new("R-3-2-36"), None)
        .unwrap();

    // 13 matches, h=3, v=2: singles count is fixed by the shape.
    assert_eq!(bundle.assignment.singles.len(), 8);
    assert_eq!(bundle.assignment.three_way.len(), 3);
    assert_eq!(bundle.assignment.two_way.len(), 2);
    assert!(bundle.rows.len() <= 36);
    assert!(!bundle.rows.is_empty());
    assert!(bundle.rows.iter().all(|row| row.len() == 13));
}

#[test]
fn test_full_system_plays_entire_space() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(&standard_round(), &CouponRequest::new("M-3-2"), None)
        .unwrap();

    assert_eq!(bundle.rows.len(), 108);
    assert_eq!(bundle.uncovered_points, Some(0));
    assert_eq!(bundle.summary.total_cost, Cash::from_float(108.0));
}

#[test]
fn test_building_twice_is_byte_identical() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let request = CouponRequest::new("R-3-2-36");
    let round = standard_round();

    let first = engine.build(&round, &request, None).unwrap();
    let second = engine.build(&round, &request, None).unwrap();
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.assignment, second.assignment);
    // Same shape: one cache slot, no recomputation.
    assert_eq!(engine.cache().len(), 1);
}

#[test]
fn test_compact_pool_8_matches() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(&compact_round(), &CouponRequest::new("T-R-2-2-12"), None)
        .unwrap();

    assert_eq!(bundle.assignment.singles.len(), 4);
    assert!(bundle.rows.iter().all(|row| row.len() == 8));
    assert!(bundle.rows.len() <= 12);
}

#[test]
fn test_full_extension_triples_rows() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let round = standard_round();

    let plain = engine
        .build(&round, &CouponRequest::new("R-4-0-27"), None)
        .unwrap();
    let extended = engine
        .build(
            &round,
            &CouponRequest::new("R-4-0-27").with_extension(CoverageExtension::full(MatchId(1))),
            None,
        )
        .unwrap();

    assert_eq!(extended.rows.len(), plain.rows.len() * 3);
}

#[test]
fn test_partial_extension_multiplies_by_subset_size() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let round = standard_round();

    let plain = engine
        .build(&round, &CouponRequest::new("R-4-0-27"), None)
        .unwrap();
    let extended = engine
        .build(
            &round,
            &CouponRequest::new("R-4-0-27").with_extension(CoverageExtension::partial(
                MatchId(2),
                vec![Outcome::Home, Outcome::Draw],
            )),
            None,
        )
        .unwrap();

    assert_eq!(extended.rows.len(), plain.rows.len() * 2);
}

#[test]
fn test_cost_ceiling_degrades_rows() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let round = standard_round();

    let capped = engine
        .build(
            &round,
            &CouponRequest::new("M-3-2").with_cost_ceiling(Cash::from_float(20.0)),
            None,
        )
        .unwrap();

    assert!(capped.within_ceiling);
    assert!(capped.summary.total_cost <= Cash::from_float(20.0));
    assert!(!capped.collapsed_positions.is_empty());
    assert!(!capped.rows.is_empty());
}

#[test]
fn test_unreachable_ceiling_is_best_effort() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(
            &standard_round(),
            &CouponRequest::new("R-3-2-36").with_cost_ceiling(Cash::ZERO),
            None,
        )
        .unwrap();

    // Every hedge collapsed to its leading symbol: one row remains.
    assert!(!bundle.within_ceiling);
    assert_eq!(bundle.rows.len(), 1);
    assert_eq!(bundle.summary.total_cost, Cash::from_float(1.0));
}

#[test]
fn test_unknown_system_is_an_error() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let result = engine.build(&standard_round(), &CouponRequest::new("R-9-9-99"), None);
    assert!(matches!(result, Err(engine::EngineError::UnknownSystem(_))));
}

/// Predictor that proposes matches 1..h three-way, h+1..h+v two-way, the
/// rest singles on their leading outcome.
struct ByNumber;

impl Predictor for ByNumber {
    fn propose(
        &self,
        forecasts: &[MatchForecast],
        shape: &SystemShape,
    ) -> Result<HedgeProposal, PredictorError> {
        let h = shape.three_way as usize;
        let v = shape.two_way as usize;
        let mut proposal = HedgeProposal::default();
        for (i, forecast) in forecasts.iter().enumerate() {
            let category = if i < h {
                HedgeCategory::ThreeWay
            } else if i < h + v {
                HedgeCategory::TwoWay(Outcome::Home, Outcome::Away)
            } else {
                HedgeCategory::Single(forecast.leading)
            };
            proposal.push(forecast.match_id, category);
        }
        Ok(proposal)
    }
}

#[test]
fn test_valid_predictor_proposal_drives_assignment() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(&standard_round(), &CouponRequest::new("R-3-2-36"), Some(&ByNumber))
        .unwrap();

    assert_eq!(
        bundle.assignment.three_way,
        vec![MatchId(1), MatchId(2), MatchId(3)]
    );
    assert_eq!(bundle.assignment.singles.len(), 8);
    assert_eq!(
        bundle.assignment.two_way[0].symbols,
        [Outcome::Home, Outcome::Away]
    );
}

/// Predictor that always times out.
struct AlwaysDown;

impl Predictor for AlwaysDown {
    fn propose(
        &self,
        _forecasts: &[MatchForecast],
        _shape: &SystemShape,
    ) -> Result<HedgeProposal, PredictorError> {
        Err(PredictorError::TimedOut)
    }
}

#[test]
fn test_predictor_failure_never_surfaces() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let bundle = engine
        .build(&standard_round(), &CouponRequest::new("R-3-2-36"), Some(&AlwaysDown))
        .unwrap();

    // Fallback path: same exact counts as the predictor path.
    assert_eq!(bundle.assignment.singles.len(), 8);
    assert_eq!(bundle.assignment.three_way.len(), 3);
    assert_eq!(bundle.assignment.two_way.len(), 2);
}

#[test]
fn test_cache_clear_keeps_results_stable() {
    let engine = CouponEngine::new(SystemCatalog::builtin());
    let request = CouponRequest::new("R-0-6-32");
    let round = standard_round();

    let before = engine.build(&round, &request, None).unwrap();
    engine.cache().clear();
    let after = engine.build(&round, &request, None).unwrap();
    assert_eq!(before.rows, after.rows);
}
