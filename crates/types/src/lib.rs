//! Core types for the coupon system.
//!
//! This crate provides the shared vocabulary used across the pipeline,
//! including outcome symbols, match identifiers, fixed-point money,
//! prediction signals, system shapes, and the system catalog.

mod catalog;
mod extension;
mod forecast;
mod ids;
mod money;
mod outcome;
mod shape;

pub use catalog::{SystemCatalog, SystemDefinition, SystemKind};
pub use extension::{CoverageExtension, ExtensionKind};
pub use forecast::{ConfidenceTier, MatchForecast};
pub use ids::{MatchId, CASH_SCALE};
pub use money::Cash;
pub use outcome::Outcome;
pub use shape::{ShapeError, SystemShape};
