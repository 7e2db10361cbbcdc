//! Golden-section search over the constrained width domain.
//!
//! Golden-section search finds the maximum of a unimodal function on a
//! bounded interval by iteratively narrowing the bracket, placing interior
//! evaluation points with the golden ratio so that one evaluation is
//! reused per iteration. No derivatives are needed, and the iteration
//! count is bounded: the bracket shrinks by a fixed factor
//! ($\varphi^{-1} \approx 0.618$) each step.

use crate::config::search;
use crate::geometry;
use crate::types::{AreaResult, OptimizeError};

/// Inverse golden ratio, $(\sqrt 5 - 1) / 2$.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Maximizes the enclosed area over `width ∈ (ε, maxWidth − ε)` by
/// golden-section search.
///
/// The caller (`optimize_with`) has already validated the perimeter. The
/// bracket margin keeps every probe strictly inside the open domain, so
/// the geometry layer's domain check can only fire on a defective
/// bracket.
///
/// # Errors
/// * `OptimizeError::InvalidGeometry` if a probe lands outside the valid
///   domain. Prevented by construction; tests assert it never surfaces.
pub fn maximize_golden_section(perimeter: f64) -> Result<AreaResult, OptimizeError> {
    let max_width = geometry::max_width(perimeter);

    // Margin capped relative to max_width so tiny perimeters keep a
    // non-empty bracket.
    let epsilon = search::BRACKET_EPSILON.min(max_width * search::EPSILON_CAP);
    let mut lo = epsilon;
    let mut hi = max_width - epsilon;

    let objective =
        |width: f64| geometry::checked_area(width, geometry::height_for(width, perimeter));

    let tolerance = search::WIDTH_REL_TOLERANCE * hi;

    let mut left = hi - INV_PHI * (hi - lo);
    let mut right = lo + INV_PHI * (hi - lo);
    let mut area_left = objective(left)?;
    let mut area_right = objective(right)?;

    while hi - lo > tolerance {
        if area_left > area_right {
            hi = right;
            right = left;
            area_right = area_left;
            left = hi - INV_PHI * (hi - lo);
            area_left = objective(left)?;
        } else {
            lo = left;
            left = right;
            area_left = area_right;
            right = lo + INV_PHI * (hi - lo);
            area_right = objective(right)?;
        }
    }

    let width = 0.5 * (lo + hi);
    let height = geometry::height_for(width, perimeter);
    let max_area = geometry::checked_area(width, height)?;

    Ok(AreaResult {
        width,
        height,
        max_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_perimeter_12() {
        // Closed-form optimum: width = 24 / (pi + 4) ≈ 3.3606,
        // height ≈ 1.6805, area ≈ 10.08.
        let result = maximize_golden_section(12.0).unwrap();
        assert!((result.width - 3.3606).abs() < 1e-3, "width {}", result.width);
        assert!(
            (result.height - 1.6805).abs() < 1e-3,
            "height {}",
            result.height
        );
        assert!(
            (result.max_area - 10.08).abs() < 1e-2,
            "area {}",
            result.max_area
        );
    }

    #[test]
    fn width_converges_to_the_analytic_optimum() {
        for perimeter in [1.0, 7.5, 12.0, 50.0, 100.0] {
            let result = maximize_golden_section(perimeter).unwrap();
            let exact = geometry::closed_form_width(perimeter);
            let rel_err = (result.width - exact).abs() / exact;
            assert!(
                rel_err < 1e-4,
                "P={}: width {} vs exact {}",
                perimeter,
                result.width,
                exact
            );
        }
    }

    #[test]
    fn result_satisfies_the_perimeter_constraint() {
        let perimeter = 33.3;
        let result = maximize_golden_section(perimeter).unwrap();
        let reconstructed =
            result.width * (1.0 + std::f64::consts::FRAC_PI_2) + 2.0 * result.height;
        assert!((reconstructed - perimeter).abs() < 1e-6);
    }

    #[test]
    fn search_is_deterministic() {
        let a = maximize_golden_section(42.0).unwrap();
        let b = maximize_golden_section(42.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_geometry_error_across_the_ui_range() {
        // The bracket margin must keep every probe in-domain for the whole
        // perimeter range the presentation layer can request.
        let mut perimeter = 1.0;
        while perimeter <= 100.0 {
            assert!(
                maximize_golden_section(perimeter).is_ok(),
                "geometry error at P={}",
                perimeter
            );
            perimeter += 0.7;
        }
    }
}
