//! Engine crate: the coupon generation pipeline.
//!
//! Wires the components together in dependency order:
//!
//! ```text
//! forecasts ──► resolve (hedging) ──► HedgeAssignment
//!                                          │
//! shape ──► KeyRowCache (covering) ──► key rows
//!                                          │
//!                                          ▼
//!                              materialize (coupon)
//!                                          │
//!                        extensions ──► degrade ──► CouponBundle
//! ```
//!
//! The resolver runs first (it needs only shape and forecasts), the
//! key-row reduction is fetched from the memoized cache, and budget
//! degradation re-enters the materialized rows without regenerating key
//! rows.

mod error;
mod pipeline;

pub use error::EngineError;
pub use pipeline::{radius_for, CouponBundle, CouponEngine, CouponRequest};
