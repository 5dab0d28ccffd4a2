//! Hedging crate: assignment of matches to hedge categories.
//!
//! This crate decides which matches of a round become single picks,
//! three-way hedges, and two-way hedges:
//! - The `Predictor` trait is the injected capability for the external
//!   prediction service; its proposals pass through a validation gate.
//! - A deterministic fallback produces an assignment from the forecast
//!   signals alone, and absorbs every predictor failure.
//!
//! The resolver's contract: it always returns a validated, fully
//! partitioned assignment, never a partial one.

mod assignment;
mod predictor;
mod resolver;

pub use assignment::{HedgeAssignment, SinglePick, TwoWayHedge};
pub use predictor::{HedgeCategory, HedgeProposal, Predictor, PredictorError, ProposedPick};
pub use resolver::{fallback_assignment, resolve, two_way_pair, ProposalRejection};
