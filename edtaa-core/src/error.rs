/// Recoverable validation errors for coverage input.
///
/// The transform itself treats these conditions as fatal; this type exists so
/// callers that must tolerate bad input (batch glyph baking, bindings) can
/// check before calling.
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CoverageError {
    /// Both dimensions must be greater than one.
    TooSmall { width: usize, height: usize },
    /// Buffer length does not match `width * height`.
    LengthMismatch { expected: usize, actual: usize },
    /// A sample is NaN or infinite.
    NonFinite { index: usize },
    /// Every sample has the same value, so there is no edge to measure from.
    Uniform { value: f64 },
    /// The coverage varies but yields no usable distance range, e.g. an image
    /// of only 0 and exactly 0.5 (`vmin == 0`) or one with every sample >= 1
    /// (`vmin` stays at the unset sentinel).
    Degenerate { vmin: f64 },
    /// Glyph sizes must be positive and finite.
    InvalidGlyphSize { highres: f64, lowres: f64 },
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageError::TooSmall { width, height } => write!(
                f,
                "coverage image {}x{} is too small: both dimensions must be > 1",
                width, height
            ),
            CoverageError::LengthMismatch { expected, actual } => write!(
                f,
                "coverage buffer has {} samples, expected {}",
                actual, expected
            ),
            CoverageError::NonFinite { index } => {
                write!(f, "coverage sample {} is not finite", index)
            }
            CoverageError::Uniform { value } => write!(
                f,
                "coverage is uniformly {}: no edge to compute a distance field from",
                value
            ),
            CoverageError::Degenerate { vmin } => write!(
                f,
                "coverage has no usable edge: distance range {} is degenerate",
                vmin
            ),
            CoverageError::InvalidGlyphSize { highres, lowres } => write!(
                f,
                "glyph sizes must be positive and finite, got {} -> {}",
                highres, lowres
            ),
        }
    }
}

impl std::error::Error for CoverageError {}

/// Check that `coverage` can be handed to the distance transform.
///
/// Returns the first problem found. A passing image is guaranteed not to trip
/// the transform's dimension and length assertions, but can still have a
/// degenerate distance range; [`crate::distance_map::try_distance_map`]
/// reports that case as well.
pub fn validate_coverage(
    coverage: &[f64],
    width: usize,
    height: usize,
) -> Result<(), CoverageError> {
    if width <= 1 || height <= 1 {
        return Err(CoverageError::TooSmall { width, height });
    }
    let expected = width.checked_mul(height).unwrap_or(usize::MAX);
    if coverage.len() != expected {
        return Err(CoverageError::LengthMismatch {
            expected,
            actual: coverage.len(),
        });
    }
    if let Some(index) = coverage.iter().position(|v| !v.is_finite()) {
        return Err(CoverageError::NonFinite { index });
    }

    let first = coverage[0];
    if coverage.iter().all(|&v| v == first) {
        return Err(CoverageError::Uniform { value: first });
    }

    Ok(())
}
