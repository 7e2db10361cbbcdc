//! Configuration constants and tuning parameters for the window optimizer.
//!
//! This module centralizes all numeric tolerances and domain bounds to
//! facilitate tuning and maintain consistency across the codebase.
//!
//! # Tolerance Justifications
//!
//! The tolerances below are coupled: the cache tolerance must be coarser
//! than the search tolerance, otherwise a cache hit could return a result
//! less precise than a fresh search would produce.

/// Tolerances for the bounded width search.
pub mod search {
    /// Margin kept away from both ends of the width search bracket.
    ///
    /// The area objective is only defined on the open interval
    /// $(0, \text{maxWidth})$: at `width == 0` the window degenerates and at
    /// `width == maxWidth` the height reaches exactly zero. Searching on
    /// $[\epsilon, \text{maxWidth} - \epsilon]$ keeps every probe strictly
    /// inside the valid domain so the geometry layer never observes a
    /// negative height.
    pub const BRACKET_EPSILON: f64 = 1e-2;

    /// Largest fraction of `maxWidth` the bracket margin may take.
    ///
    /// For very small perimeters `BRACKET_EPSILON` alone would swallow the
    /// whole bracket (`maxWidth < 2e-2` once `perimeter < ~0.05`). The
    /// effective margin is `min(BRACKET_EPSILON, maxWidth * EPSILON_CAP)`,
    /// which keeps the bracket non-empty for every positive perimeter.
    pub const EPSILON_CAP: f64 = 0.125;

    /// Relative precision on the optimal width at which the search stops.
    ///
    /// The interior maximum is quadratic, so a width error of $10^{-5}$
    /// leaves the area accurate to roughly $10^{-10}$ relative — far below
    /// anything the callers display.
    pub const WIDTH_REL_TOLERANCE: f64 = 1e-5;
}

/// Result cache behaviour.
pub mod cache {
    /// Perimeter difference below which the cached result is reused.
    ///
    /// The presentation layer steps the perimeter in increments of 0.1, so
    /// 1e-3 comfortably absorbs float jitter in repeated reads of the same
    /// slider position while never conflating two adjacent steps.
    pub const PERIMETER_TOLERANCE: f64 = 1e-3;
}

/// Sensitivity table domain.
pub mod sensitivity {
    /// Lower end of the sampled perimeter range (inclusive).
    pub const PERIMETER_MIN: f64 = 1.0;

    /// Upper end of the sampled perimeter range (inclusive).
    pub const PERIMETER_MAX: f64 = 100.0;

    /// Number of uniformly spaced samples across the range.
    ///
    /// With 100 samples over [1, 100] the step is exactly 1.0.
    pub const SAMPLES: usize = 100;
}

/// History buffer sizing.
pub mod history {
    /// Maximum number of retained `(perimeter, maxArea)` samples.
    ///
    /// Once full, the oldest sample is dropped for each new one recorded.
    pub const CAPACITY: usize = 20;
}
