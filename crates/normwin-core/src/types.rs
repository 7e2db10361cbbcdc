use std::fmt::Display;

/// Error type for window optimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizeError {
    /// The requested perimeter is not a positive finite number.
    InvalidPerimeter { perimeter: f64 },
    /// A probe landed outside the valid geometric domain.
    ///
    /// The bounded search keeps every probe strictly inside
    /// $(0, \text{maxWidth})$, so this variant indicates a defect in the
    /// caller or the search bracket, never a runtime condition to recover
    /// from.
    InvalidGeometry { width: f64, height: f64 },
}

impl Display for OptimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizeError::InvalidPerimeter { perimeter } => {
                write!(
                    f,
                    "Perimeter {} is invalid (must be positive and finite)",
                    perimeter
                )
            }
            OptimizeError::InvalidGeometry { width, height } => write!(
                f,
                "Probed dimensions width={} height={} lie outside the valid domain",
                width, height
            ),
        }
    }
}

impl std::error::Error for OptimizeError {}

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Width search strategy selection.
///
/// This enum is shared between the core and the CLI for consistent
/// strategy naming.
///
/// # Variants
///
/// - `GoldenSection`: Derivative-free bounded bracket narrowing.
/// - `ClosedForm`: The exact analytic maximizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Golden-section search: derivative-free bracket narrowing.
    ///
    /// Converges for any unimodal objective; the reference strategy and
    /// the default, since it exercises the same code path the sensitivity
    /// table is built with.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "golden", alias = "golden-section"))]
    GoldenSection,

    /// Closed form: $x^* = 2P / (\pi + 4)$, evaluated directly.
    ///
    /// Exact for this shape family; used to cross-check the iterative
    /// search and wherever the extra iterations are not worth it.
    #[cfg_attr(feature = "serde", serde(rename = "closed", alias = "closed-form"))]
    ClosedForm,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::GoldenSection => write!(f, "Golden Section"),
            Algorithm::ClosedForm => write!(f, "Closed Form"),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Optimal dimensions and area for one perimeter, immutable once produced.
///
/// The semicircle radius is always `width / 2` and is therefore derived,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaResult {
    /// Optimal rectangle width (and semicircle diameter), in meters.
    pub width: f64,
    /// Optimal rectangle height, in meters.
    pub height: f64,
    /// Enclosed area at the optimum, in square meters.
    pub max_area: f64,
}

impl AreaResult {
    /// Semicircle radius at the optimum.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }
}

/// One `(perimeter, maxArea)` sample of the sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityPoint {
    /// Sampled perimeter, in meters.
    pub perimeter: f64,
    /// Maximum enclosed area at that perimeter, in square meters.
    pub max_area: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_half_width() {
        let result = AreaResult {
            width: 3.0,
            height: 1.5,
            max_area: 8.0,
        };
        assert_eq!(result.radius(), 1.5);
    }

    #[test]
    fn error_messages_name_the_offending_values() {
        let msg = OptimizeError::InvalidPerimeter { perimeter: -2.0 }.to_string();
        assert!(msg.contains("-2"));

        let msg = OptimizeError::InvalidGeometry {
            width: 5.0,
            height: -0.1,
        }
        .to_string();
        assert!(msg.contains("-0.1"));
    }

    #[test]
    fn default_algorithm_is_golden_section() {
        assert_eq!(Algorithm::default(), Algorithm::GoldenSection);
    }
}
