//! Covering crate: hedge-space enumeration and covering-code reduction.
//!
//! This crate provides the combinatorial core of the coupon system:
//! - Full-space enumeration of mixed-radix digit vectors for a hedge shape
//! - Greedy covering-code reduction of a full space to a row budget
//! - A process-wide memoized cache of reduced key-row sets
//!
//! # Architecture
//!
//! ```text
//! (h, v) ──► enumerate ──► full space ──► reduce ──► KeyRowSet
//!                                            ▲
//!                              KeyRowCache ──┘ (memoized, single-flight)
//! ```
//!
//! Everything here is pure and deterministic: the same shape always yields
//! byte-identical key rows, which is what makes the cache sound.

mod cache;
mod reduce;
mod space;

pub use cache::{KeyRowCache, ShapeKey};
pub use reduce::{reduce, KeyRowSet, ReduceLimits};
pub use space::{enumerate, DigitVector, Digits, MAX_SPACE};
