//! Process-wide memoized cache of reduced key-row sets.
//!
//! Shape -> key-row reduction is the only expensive step in the pipeline,
//! and it is a pure function of its inputs, so results are memoized for
//! the process lifetime. Population is single-flight: the first caller
//! for a shape computes while concurrent callers block on the same slot,
//! after which everyone shares the immutable cached `Arc`.

use crate::reduce::{reduce, KeyRowSet, ReduceLimits};
use crate::space::enumerate;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;
use types::ShapeError;

/// Cache identity of a key-row set.
///
/// The covering radius folds the guarantee level and the round's match
/// count into one value, so pools sharing a radius share the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    pub three_way: u8,
    pub two_way: u8,
    pub row_budget: u32,
    pub radius: u8,
}

impl ShapeKey {
    pub fn new(three_way: u8, two_way: u8, row_budget: u32, radius: u8) -> Self {
        Self {
            three_way,
            two_way,
            row_budget,
            radius,
        }
    }
}

type SlotResult = Result<Arc<KeyRowSet>, ShapeError>;

/// Memoized shape -> key-row set cache with single-flight population.
///
/// Locking discipline: the map mutex is held only to fetch or insert a
/// slot, never during computation. The per-slot `OnceLock` serializes
/// computation for one shape without blocking other shapes.
#[derive(Debug, Default)]
pub struct KeyRowCache {
    slots: Mutex<HashMap<ShapeKey, Arc<OnceLock<SlotResult>>>>,
    limits: ReduceLimits,
}

impl KeyRowCache {
    /// Create a cache with default reduction limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache with explicit reduction limits.
    pub fn with_limits(limits: ReduceLimits) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            limits,
        }
    }

    /// Fetch the key-row set for a shape, computing it on first request.
    pub fn get_or_compute(&self, key: ShapeKey) -> Result<Arc<KeyRowSet>, ShapeError> {
        let slot = {
            let mut slots = self.slots.lock();
            slots.entry(key).or_default().clone()
        };

        slot.get_or_init(|| {
            debug!(?key, "computing key-row set");
            let space = enumerate(key.three_way, key.two_way)?;
            Ok(Arc::new(reduce(
                &space,
                key.row_budget,
                key.radius as usize,
                &self.limits,
            )))
        })
        .clone()
    }

    /// Drop every cached entry, forcing recomputation on next request.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    /// Number of populated or in-flight slots.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Check if the cache holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}
