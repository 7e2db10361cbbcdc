//! Exact analytic maximizer.
//!
//! Substituting the perimeter constraint into the area gives a downward
//! parabola in the width, so the maximum has a closed form:
//! $x^* = 2P / (\pi + 4)$. This strategy evaluates it directly and exists
//! both as the fast path and as an independent cross-check for the
//! iterative search.

use crate::geometry;
use crate::types::{AreaResult, OptimizeError};

/// Evaluates the closed-form optimum for the given perimeter.
///
/// # Errors
/// * `OptimizeError::InvalidGeometry` if the derived height is negative,
///   which cannot happen for a positive finite perimeter (the analytic
///   optimum is always interior).
pub fn maximize_closed_form(perimeter: f64) -> Result<AreaResult, OptimizeError> {
    let width = geometry::closed_form_width(perimeter);
    let height = geometry::height_for(width, perimeter);
    let max_area = geometry::checked_area(width, height)?;

    Ok(AreaResult {
        width,
        height,
        max_area,
    })
}
