//! Single-slot result memoization.
//!
//! The presentation layer re-reads the current perimeter far more often
//! than it changes it, so one slot keyed on the last requested perimeter
//! is all the memoization the workload needs. Slot validity is a
//! tolerance comparison, not exact float equality: re-reads of the same
//! slider position may differ in the last few bits.

use crate::config::cache;
use crate::types::AreaResult;

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_ratio: f64,
}

/// Single-slot memo keyed on the last requested perimeter.
///
/// The slot is overwritten wholesale on every miss and never partially
/// updated; a second distinct perimeter always evicts the prior entry.
#[derive(Debug, Clone)]
pub struct ResultCache {
    tolerance: f64,
    slot: Option<(f64, AreaResult)>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Creates an empty cache with the default perimeter tolerance.
    pub fn new() -> Self {
        Self::with_tolerance(cache::PERIMETER_TOLERANCE)
    }

    /// Creates an empty cache with an explicit perimeter tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            slot: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Whether the stored slot is valid for the requested perimeter.
    #[inline]
    pub fn is_hit(&self, perimeter: f64) -> bool {
        match self.slot {
            Some((last, _)) => (last - perimeter).abs() < self.tolerance,
            None => false,
        }
    }

    /// Returns the cached result if the slot is valid for `perimeter`,
    /// updating the hit/miss counters either way.
    pub fn lookup(&mut self, perimeter: f64) -> Option<AreaResult> {
        match self.slot {
            Some((last, result)) if (last - perimeter).abs() < self.tolerance => {
                self.hits += 1;
                Some(result)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Overwrites the slot with a freshly computed result.
    pub fn store(&mut self, perimeter: f64, result: AreaResult) {
        self.slot = Some((perimeter, result));
    }

    /// Hit/miss counters accumulated over the cache's lifetime.
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_ratio = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            hit_ratio,
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
