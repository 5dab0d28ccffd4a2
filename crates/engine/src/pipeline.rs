//! The coupon engine: catalog-driven orchestration of one betting round.

use crate::error::EngineError;
use coupon::{apply_extension, degrade_to_ceiling, materialize, summarize, CouponRow, CouponSummary};
use covering::{KeyRowCache, ReduceLimits, ShapeKey};
use hedging::{resolve, HedgeAssignment, Predictor};
use tracing::debug;
use types::{Cash, CoverageExtension, MatchForecast, MatchId, Outcome, SystemCatalog, SystemShape};

/// One coupon-generation request.
#[derive(Debug, Clone)]
pub struct CouponRequest {
    /// Catalog identifier of the system to play.
    pub system_id: String,
    /// Stake per row.
    pub stake_per_row: Cash,
    /// Optional ceiling on total cost; triggers budget degradation.
    pub cost_ceiling: Option<Cash>,
    /// Coverage extensions applied after row generation.
    pub extensions: Vec<CoverageExtension>,
}

impl CouponRequest {
    /// Request the given system with a 1.00 kr stake and no ceiling.
    pub fn new(system_id: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            stake_per_row: Cash::from_float(1.0),
            cost_ceiling: None,
            extensions: Vec::new(),
        }
    }

    /// Set the per-row stake.
    pub fn with_stake(mut self, stake: Cash) -> Self {
        self.stake_per_row = stake;
        self
    }

    /// Set a total-cost ceiling.
    pub fn with_cost_ceiling(mut self, ceiling: Cash) -> Self {
        self.cost_ceiling = Some(ceiling);
        self
    }

    /// Append a coverage extension.
    pub fn with_extension(mut self, extension: CoverageExtension) -> Self {
        self.extensions.push(extension);
        self
    }
}

/// The finished product of one round: assignment, rows, and summary.
#[derive(Debug, Clone)]
pub struct CouponBundle {
    /// System the coupon was built for.
    pub system_id: String,
    /// The validated hedge assignment.
    pub assignment: HedgeAssignment,
    /// Playable rows in final order.
    pub rows: Vec<CouponRow>,
    /// Cost and expected-value summary.
    pub summary: CouponSummary,
    /// False when a cost ceiling proved unreachable (best-effort result).
    pub within_ceiling: bool,
    /// Match positions collapsed by budget degradation, in order.
    pub collapsed_positions: Vec<usize>,
    /// True when the covering reduction hit its op ceiling and truncated.
    pub degraded_reduction: bool,
    /// Full-space points left uncovered by the key rows, when evaluated.
    pub uncovered_points: Option<usize>,
}

/// Catalog-driven coupon generator with a process-wide key-row cache.
#[derive(Debug, Default)]
pub struct CouponEngine {
    catalog: SystemCatalog,
    cache: KeyRowCache,
}

impl CouponEngine {
    /// Create an engine over a catalog with default reduction limits.
    pub fn new(catalog: SystemCatalog) -> Self {
        Self {
            catalog,
            cache: KeyRowCache::new(),
        }
    }

    /// Create an engine with explicit reduction limits.
    pub fn with_limits(catalog: SystemCatalog, limits: ReduceLimits) -> Self {
        Self {
            catalog,
            cache: KeyRowCache::with_limits(limits),
        }
    }

    /// The catalog this engine serves.
    pub fn catalog(&self) -> &SystemCatalog {
        &self.catalog
    }

    /// The key-row cache (exposed for invalidation in tests and tools).
    pub fn cache(&self) -> &KeyRowCache {
        &self.cache
    }

    /// Build one coupon: resolve hedges, fetch key rows, materialize,
    /// extend, and degrade under the cost ceiling.
    pub fn build(
        &self,
        forecasts: &[MatchForecast],
        request: &CouponRequest,
        predictor: Option<&dyn Predictor>,
    ) -> Result<CouponBundle, EngineError> {
        let definition = self
            .catalog
            .get(&request.system_id)
            .ok_or_else(|| EngineError::UnknownSystem(request.system_id.clone()))?;
        let shape = definition.shape;
        shape.validate(forecasts.len())?;

        let assignment = resolve(forecasts, &shape, predictor)?;

        let radius = radius_for(&shape, forecasts.len());
        let key = ShapeKey::new(shape.three_way, shape.two_way, shape.row_budget, radius);
        let key_rows = self.cache.get_or_compute(key)?;
        debug!(
            system = %request.system_id,
            rows = key_rows.row_count(),
            degraded = key_rows.degraded,
            "key rows ready"
        );

        let match_order: Vec<MatchId> = forecasts.iter().map(|f| f.match_id).collect();
        let mut rows = materialize(&key_rows.rows, &assignment, &match_order)?;

        for extension in &request.extensions {
            let position = match_order
                .iter()
                .position(|&id| id == extension.match_id)
                .ok_or(EngineError::UnknownMatch(extension.match_id))?;
            let symbols = extension.symbols();
            if symbols.is_empty() {
                return Err(EngineError::EmptyExtension(extension.match_id));
            }
            rows = apply_extension(&rows, position, symbols);
        }

        let (rows, within_ceiling, collapsed_positions) = match request.cost_ceiling {
            Some(ceiling) => {
                let leading: Vec<Outcome> = forecasts.iter().map(|f| f.leading).collect();
                let outcome = degrade_to_ceiling(rows, &leading, request.stake_per_row, ceiling);
                (outcome.rows, outcome.within_ceiling, outcome.collapsed_positions)
            }
            None => (rows, true, Vec::new()),
        };

        let summary = summarize(&rows, forecasts, request.stake_per_row);
        Ok(CouponBundle {
            system_id: request.system_id.clone(),
            assignment,
            rows,
            summary,
            within_ceiling,
            collapsed_positions,
            degraded_reduction: key_rows.degraded,
            uncovered_points: key_rows.uncovered.as_ref().map(Vec::len),
        })
    }
}

/// Covering radius for a shape in a round of `total_matches`.
///
/// The guarantee level counts correct matches across the whole coupon,
/// so the worst tolerated miss distance is `total - guarantee`, clamped
/// to the hedged dimensions. With all singles correct this coincides
/// with the hedged-positions reading of the guarantee.
pub fn radius_for(shape: &SystemShape, total_matches: usize) -> u8 {
    let hedged = shape.hedged_positions();
    total_matches
        .saturating_sub(shape.guarantee_level as usize)
        .min(hedged) as u8
}
