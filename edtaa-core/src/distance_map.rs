/// Signed distance field from anti-aliased coverage.
///
/// Pipeline: copy input -> gradient -> sweep (outside) -> invert -> gradient
/// -> sweep (inside) -> outside - inside -> clamp to [-vmin, vmin] -> [0, 1].
///
/// The caller's buffer is only read at the start and written at the end; every
/// intermediate lives in buffers owned by this call.
use crate::error::{validate_coverage, CoverageError};
use crate::gradient::compute_gradient;
use crate::sweep::relax;
use crate::UNSET_DISTANCE;

/// Replace `coverage` with its normalized bipolar distance field.
///
/// Output is in [0, 1] with 0.5 on the edge. Values grow with distance outside
/// the shape and shrink inside it.
///
/// # Panics
/// - if `width <= 1`, `height <= 1` or `coverage.len() != width * height`
/// - if the image has no usable edge (e.g. uniformly 0 or uniformly 1); use
///   [`try_distance_map`] when that can happen
pub fn distance_map(coverage: &mut [f64], width: usize, height: usize) {
    let field = signed_distance_field(coverage, width, height);
    coverage.copy_from_slice(&field);
}

/// Compute the normalized bipolar distance field without touching the input.
///
/// Same contract and panics as [`distance_map`].
pub fn signed_distance_field(coverage: &[f64], width: usize, height: usize) -> Vec<f64> {
    let mut field = bipolar_field(coverage, width, height);
    let vmin = distance_range(&field);
    assert!(
        has_usable_range(vmin),
        "degenerate distance range {} for {}x{} coverage: image has no usable edge",
        vmin,
        width,
        height
    );
    normalize(&mut field, vmin, width, height);
    field
}

/// Fallible [`signed_distance_field`] for input that has not been vetted.
///
/// Runs [`validate_coverage`] first, then reports a degenerate distance
/// range as [`CoverageError::Degenerate`] instead of panicking.
pub fn try_signed_distance_field(
    coverage: &[f64],
    width: usize,
    height: usize,
) -> Result<Vec<f64>, CoverageError> {
    validate_coverage(coverage, width, height)?;

    let mut field = bipolar_field(coverage, width, height);
    let vmin = distance_range(&field);
    if !has_usable_range(vmin) {
        return Err(CoverageError::Degenerate { vmin });
    }
    normalize(&mut field, vmin, width, height);
    Ok(field)
}

/// Fallible [`distance_map`]. On error the buffer is left untouched.
pub fn try_distance_map(
    coverage: &mut [f64],
    width: usize,
    height: usize,
) -> Result<(), CoverageError> {
    let field = try_signed_distance_field(coverage, width, height)?;
    coverage.copy_from_slice(&field);
    Ok(())
}

/// Largest distance reached on the inside, taken from the most negative value.
fn distance_range(field: &[f64]) -> f64 {
    field.iter().copied().fold(f64::INFINITY, f64::min).abs()
}

fn has_usable_range(vmin: f64) -> bool {
    vmin.is_finite() && vmin > 0.0 && vmin < UNSET_DISTANCE
}

fn normalize(field: &mut [f64], vmin: f64, width: usize, height: usize) {
    let scale = 2.0 * vmin;
    for v in field.iter_mut() {
        *v = (v.clamp(-vmin, vmin) + vmin) / scale;
    }

    log::debug!(
        "distance map {}x{} done, vmin = {:.4}",
        width,
        height,
        vmin
    );
}

/// Compute `outside - inside`, the unclamped bipolar field.
///
/// Positive outside the shape, negative inside, in pixels.
pub fn bipolar_field(coverage: &[f64], width: usize, height: usize) -> Vec<f64> {
    assert!(
        width > 1 && height > 1,
        "distance map needs an image of at least 2x2, got {}x{}",
        width,
        height
    );
    assert_eq!(
        coverage.len(),
        width * height,
        "coverage buffer does not match {}x{}",
        width,
        height
    );

    let mut working = coverage.to_vec();
    let mut outside = unsigned_distance(&working, width, height);

    for v in working.iter_mut() {
        *v = 1.0 - *v;
    }
    let inside = unsigned_distance(&working, width, height);

    for (o, i) in outside.iter_mut().zip(&inside) {
        *o -= i;
    }
    outside
}

/// One unsigned pass: distance from every pixel to the covered region.
fn unsigned_distance(coverage: &[f64], width: usize, height: usize) -> Vec<f64> {
    let gradients = compute_gradient(coverage, width, height);
    let mut distances = relax(coverage, &gradients, width, height).distances;
    for d in distances.iter_mut() {
        if *d < 0.0 {
            *d = 0.0;
        }
    }
    distances
}
