//! Geometric relations of the Norman window.
//!
//! A Norman window is a rectangle of width $x$ and height $y$ topped by a
//! semicircle of radius $x/2$ sharing the rectangle's top edge as diameter.
//! Fixing the perimeter $P$ gives the linear constraint
//!
//! $$ x \left(1 + \frac{\pi}{2}\right) + 2y = P $$
//!
//! and the enclosed area
//!
//! $$ A(x, y) = x y + \frac{\pi x^2}{8}. $$
//!
//! Everything in this module is a pure function of its arguments; no state.

use crate::types::OptimizeError;

/// Coefficient of `width` in the perimeter constraint: $1 + \pi/2$.
#[inline]
pub(crate) fn width_coefficient() -> f64 {
    1.0 + std::f64::consts::FRAC_PI_2
}

/// Largest width admitted by the perimeter constraint.
///
/// At `max_width(perimeter)` the rectangle height reaches exactly zero, so
/// the valid search domain for the width is the open interval
/// `(0, max_width)`.
#[inline]
pub fn max_width(perimeter: f64) -> f64 {
    perimeter / width_coefficient()
}

/// Rectangle height implied by the perimeter constraint for a given width.
#[inline]
pub fn height_for(width: f64, perimeter: f64) -> f64 {
    (perimeter - width * width_coefficient()) / 2.0
}

/// Enclosed area: rectangle plus semicircle of radius `width / 2`.
#[inline]
pub fn area(width: f64, height: f64) -> f64 {
    width * height + std::f64::consts::PI * width * width / 8.0
}

/// Enclosed area, rejecting dimensions outside the valid domain.
///
/// # Errors
///
/// Returns [`OptimizeError::InvalidGeometry`] when `width < 0` or
/// `height < 0`, which means the caller probed outside `(0, max_width)`.
/// The bounded search avoids this by construction via its bracket margin.
#[inline]
pub fn checked_area(width: f64, height: f64) -> Result<f64, OptimizeError> {
    if width < 0.0 || height < 0.0 {
        return Err(OptimizeError::InvalidGeometry { width, height });
    }
    Ok(area(width, height))
}

/// Exact area-maximizing width for a given perimeter: $x^* = 2P / (\pi + 4)$.
///
/// Derived by substituting the constraint into the area, giving the
/// downward parabola $A(x) = \frac{P x}{2} - \frac{x^2 (\pi + 4)}{8}$,
/// whose vertex is at $2P / (\pi + 4)$.
#[inline]
pub fn closed_form_width(perimeter: f64) -> f64 {
    2.0 * perimeter / (std::f64::consts::PI + 4.0)
}
