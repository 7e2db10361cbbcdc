//! Precomputed area-vs-perimeter sensitivity curve.
//!
//! The table samples the optimal area at 100 uniformly spaced perimeters
//! over [1, 100] and is the basis for area-vs-perimeter plots in the
//! presentation layer. It is built exactly once, on first access, and is
//! immutable afterward.
//!
//! The build is the one place the optimizer runs in bulk, so the samples
//! are computed in parallel with rayon. It also deliberately bypasses the
//! single-slot result cache: 100 distinct perimeters would evict each
//! other on every step.

use rayon::prelude::*;

use crate::algo;
use crate::config::sensitivity;
use crate::types::{Algorithm, SensitivityPoint};

/// Immutable grid of `(perimeter, maxArea)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityTable {
    points: Vec<SensitivityPoint>,
}

impl SensitivityTable {
    /// Builds the table by optimizing every grid perimeter.
    ///
    /// Every sampled perimeter is positive and finite by construction, so
    /// the per-sample optimization cannot fail.
    pub fn build(algorithm: Algorithm) -> Self {
        let step = (sensitivity::PERIMETER_MAX - sensitivity::PERIMETER_MIN)
            / (sensitivity::SAMPLES - 1) as f64;

        let points = (0..sensitivity::SAMPLES)
            .into_par_iter()
            .map(|i| {
                let perimeter = sensitivity::PERIMETER_MIN + step * i as f64;
                let result = algo::optimize_with(perimeter, algorithm)
                    .expect("grid perimeter is positive and finite");
                SensitivityPoint {
                    perimeter,
                    max_area: result.max_area,
                }
            })
            .collect();

        Self { points }
    }

    /// The sampled points, ordered by strictly increasing perimeter.
    #[inline]
    pub fn points(&self) -> &[SensitivityPoint] {
        &self.points
    }

    /// Number of samples (always [`sensitivity::SAMPLES`]).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
