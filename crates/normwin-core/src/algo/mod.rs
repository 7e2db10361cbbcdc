//! Width search strategies for the area maximization.
//!
//! This module groups the available strategies. The objective — the
//! enclosed area along the perimeter constraint — is smooth and strictly
//! unimodal over the open width domain, so every strategy converges to
//! the same interior maximum.
//!
//! # Strategies
//!
//! - **Golden Section (`golden_section`)**: Derivative-free bounded search.
//! - **Closed Form (`closed_form`)**: The exact analytic maximizer.

use crate::types::{Algorithm, AreaResult, OptimizeError};

pub mod closed_form;
pub mod golden_section;

pub use closed_form::maximize_closed_form;
pub use golden_section::maximize_golden_section;

/// Finds the width and height that maximize the enclosed area for the
/// given perimeter, using the default strategy.
///
/// Deterministic: identical perimeters produce identical results, which is
/// what makes the single-slot cache and the tests reproducible.
///
/// # Arguments
/// * `perimeter` - The fixed window perimeter, in meters.
///
/// # Errors
/// * `OptimizeError::InvalidPerimeter` if `perimeter <= 0` or non-finite.
///   This check precedes any search.
///
/// # Example
/// ```
/// use normwin_core::optimize;
///
/// let result = optimize(12.0).unwrap();
/// assert!((result.max_area - 10.08).abs() < 1e-2);
/// ```
#[inline]
pub fn optimize(perimeter: f64) -> Result<AreaResult, OptimizeError> {
    optimize_with(perimeter, Algorithm::default())
}

/// Finds the area-maximizing dimensions with an explicit strategy choice.
///
/// # Errors
/// * `OptimizeError::InvalidPerimeter` if `perimeter <= 0` or non-finite.
pub fn optimize_with(perimeter: f64, algorithm: Algorithm) -> Result<AreaResult, OptimizeError> {
    if !perimeter.is_finite() || perimeter <= 0.0 {
        return Err(OptimizeError::InvalidPerimeter { perimeter });
    }

    match algorithm {
        Algorithm::GoldenSection => maximize_golden_section(perimeter),
        Algorithm::ClosedForm => maximize_closed_form(perimeter),
    }
}
