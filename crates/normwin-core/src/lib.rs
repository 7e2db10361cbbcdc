//! # NormWin Core
//!
//! Area maximization for Norman windows under a fixed-perimeter constraint.
//!
//! A Norman window is a rectangle of width $x$ and height $y$ topped by a
//! semicircle of radius $x/2$. For a fixed perimeter $P$ this crate finds
//! the dimensions maximizing the enclosed area, maintains a precomputed
//! area-vs-perimeter sensitivity curve, and keeps a bounded history of
//! recent results for running statistics.
//!
//! ## Strategies
//!
//! - **Golden Section**: derivative-free bounded search over the width
//!   domain $(\epsilon, P / (1 + \pi/2) - \epsilon)$. The default.
//! - **Closed Form**: the exact maximizer $x^* = 2P / (\pi + 4)$, used as
//!   a fast path and as a cross-check for the iterative search.
//!
//! ## Usage
//!
//! Stateless, one-off optimization:
//!
//! ```rust
//! use normwin_core::optimize;
//!
//! let result = optimize(12.0).unwrap();
//! println!("width = {:.4} m, area = {:.2} m^2", result.width, result.max_area);
//! ```
//!
//! Stateful service with memoization, history, and the sensitivity table:
//!
//! ```rust
//! use normwin_core::WindowOptimizer;
//!
//! let mut optimizer = WindowOptimizer::new();
//! let result = optimizer.optimize(12.0).unwrap();
//! assert!((result.max_area - 10.08).abs() < 1e-2);
//!
//! let table = optimizer.sensitivity_table();
//! assert_eq!(table.len(), 100);
//! ```

pub mod algo;
pub mod cache;
pub mod config;
pub mod geometry;
pub mod history;
pub mod sensitivity;
pub mod types;

// Re-export types
pub use types::{Algorithm, AreaResult, OptimizeError, SensitivityPoint};

// Re-export the optimization entry points
pub use algo::{maximize_closed_form, maximize_golden_section, optimize, optimize_with};

pub use cache::{CacheStats, ResultCache};
pub use history::{HistoryBuffer, HistoryStats};
pub use sensitivity::SensitivityTable;

use std::sync::OnceLock;

/// Owning service around the optimizer's mutable state.
///
/// One value of this type holds the single-slot result cache, the lazily
/// built sensitivity table, and the bounded history buffer. Constructed
/// once and passed to every call site, it makes the lifetime of that
/// state explicit instead of keeping it ambient.
///
/// The service is single-threaded by design (`&mut self` on every
/// mutation); embedding it in a concurrent caller means wrapping the
/// whole value in one mutual-exclusion region. The sensitivity table's
/// one-time build is guarded by [`OnceLock`], so even a shared reader
/// cannot trigger a duplicate build.
#[derive(Debug, Default)]
pub struct WindowOptimizer {
    algorithm: Algorithm,
    cache: ResultCache,
    table: OnceLock<SensitivityTable>,
    history: HistoryBuffer,
}

impl WindowOptimizer {
    /// Creates a service using the default strategy and cache tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with an explicit strategy choice.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Creates a service with an explicit cache tolerance, for callers
    /// whose perimeter granularity differs from the 0.1-step default UI.
    pub fn with_cache_tolerance(tolerance: f64) -> Self {
        Self {
            cache: ResultCache::with_tolerance(tolerance),
            ..Self::default()
        }
    }

    /// The strategy this service dispatches to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Memoized optimization: one full request of the core.
    ///
    /// Checks the single-slot cache first; on a miss runs the bounded
    /// search and overwrites the slot. Every successful result, cached or
    /// fresh, is appended to the history buffer.
    ///
    /// # Errors
    /// * `OptimizeError::InvalidPerimeter` if `perimeter <= 0` or
    ///   non-finite. Invalid requests touch neither the cache slot nor
    ///   the history.
    pub fn optimize(&mut self, perimeter: f64) -> Result<AreaResult, OptimizeError> {
        let result = match self.cache.lookup(perimeter) {
            Some(cached) => cached,
            None => {
                let fresh = algo::optimize_with(perimeter, self.algorithm)?;
                self.cache.store(perimeter, fresh);
                fresh
            }
        };

        self.history.record(perimeter, result.max_area);
        Ok(result)
    }

    /// The area-vs-perimeter sensitivity table, built on first access.
    ///
    /// The build invokes the optimizer once per grid sample, bypassing the
    /// single-slot cache (100 distinct perimeters would thrash it). The
    /// table is never recomputed or invalidated afterward.
    pub fn sensitivity_table(&self) -> &SensitivityTable {
        self.table
            .get_or_init(|| SensitivityTable::build(self.algorithm))
    }

    /// Appends an externally produced `(perimeter, maxArea)` sample.
    pub fn record(&mut self, perimeter: f64, max_area: f64) {
        self.history.record(perimeter, max_area);
    }

    /// Running statistics over the retained history.
    pub fn stats(&self) -> HistoryStats {
        self.history.stats()
    }

    /// The retained history samples, oldest first.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Hit/miss counters of the single-slot cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
