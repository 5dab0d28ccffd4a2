//! Coupon crate: from key rows and hedge assignments to playable rows.
//!
//! This crate turns the abstract outputs of the covering and hedging
//! crates into concrete coupon rows:
//! - The materializer combines each digit vector with a validated hedge
//!   assignment into one row of outcome symbols.
//! - Coverage extensions widen finished row sets multiplicatively.
//! - Budget degradation collapses hedges until a cost ceiling is met.
//! - The summary reports row count, total cost, and mean expected value.
//!
//! Everything is pure: materializing the same inputs twice yields
//! identical rows.

mod budget;
mod extend;
mod materialize;
mod row;
mod summary;

pub use budget::{degrade_to_ceiling, BudgetOutcome};
pub use extend::apply_extension;
pub use materialize::{materialize, CouponError};
pub use row::CouponRow;
pub use summary::{summarize, CouponSummary};
