/// C ABI exports for shared library consumers.
use std::slice;

use crate::distance_map::{distance_map, try_distance_map};
use crate::error::{validate_coverage, CoverageError};

// Return codes of `edtaa_validate` and `edtaa_try_distance_map` (0 is success)
const ERROR_TOO_SMALL: i32 = -1;
const ERROR_LENGTH_MISMATCH: i32 = -2;
const ERROR_NON_FINITE: i32 = -3;
const ERROR_UNIFORM: i32 = -4;
const ERROR_DEGENERATE: i32 = -5;

fn error_code(err: &CoverageError) -> i32 {
    match err {
        CoverageError::TooSmall { .. } => ERROR_TOO_SMALL,
        CoverageError::LengthMismatch { .. } => ERROR_LENGTH_MISMATCH,
        CoverageError::NonFinite { .. } => ERROR_NON_FINITE,
        CoverageError::Uniform { .. } => ERROR_UNIFORM,
        CoverageError::Degenerate { .. } | CoverageError::InvalidGlyphSize { .. } => {
            ERROR_DEGENERATE
        }
    }
}

/// Sample count of a `width` x `height` buffer, `None` if it overflows.
fn sample_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

/// Check a coverage buffer before handing it to `edtaa_distance_map`.
/// Returns 0 when it is safe to transform, a negative code otherwise.
///
/// # Safety
/// `data` must be valid for reads of `width * height` doubles, or null.
#[no_mangle]
pub unsafe extern "C" fn edtaa_validate(data: *const f64, width: usize, height: usize) -> i32 {
    if width <= 1 || height <= 1 {
        return ERROR_TOO_SMALL;
    }
    let len = match sample_count(width, height) {
        Some(len) if !data.is_null() => len,
        _ => return ERROR_LENGTH_MISMATCH,
    };
    let coverage = unsafe { slice::from_raw_parts(data, len) };
    match validate_coverage(coverage, width, height) {
        Ok(()) => 0,
        Err(e) => error_code(&e),
    }
}

/// Overwrite `data` with its normalized signed distance field.
///
/// Aborts on contract violations (null buffer, dimensions <= 1, image without
/// an edge). Use `edtaa_try_distance_map` if the input is untrusted.
///
/// # Safety
/// `data` must be valid for reads and writes of `width * height` doubles and
/// must not be aliased for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn edtaa_distance_map(data: *mut f64, width: usize, height: usize) {
    assert!(!data.is_null(), "edtaa_distance_map: null coverage buffer");
    assert!(
        width > 1 && height > 1,
        "edtaa_distance_map: image must be at least 2x2, got {}x{}",
        width,
        height
    );
    let Some(len) = sample_count(width, height) else {
        panic!("edtaa_distance_map: {}x{} overflows usize", width, height);
    };
    let coverage = unsafe { slice::from_raw_parts_mut(data, len) };
    distance_map(coverage, width, height);
}

/// Overwrite `data` with its normalized signed distance field, or return a
/// negative code and leave it untouched when it cannot be transformed.
///
/// # Safety
/// Same as `edtaa_distance_map`.
#[no_mangle]
pub unsafe extern "C" fn edtaa_try_distance_map(
    data: *mut f64,
    width: usize,
    height: usize,
) -> i32 {
    if width <= 1 || height <= 1 {
        return ERROR_TOO_SMALL;
    }
    let len = match sample_count(width, height) {
        Some(len) if !data.is_null() => len,
        _ => return ERROR_LENGTH_MISMATCH,
    };
    let coverage = unsafe { slice::from_raw_parts_mut(data, len) };
    match try_distance_map(coverage, width, height) {
        Ok(()) => 0,
        Err(e) => error_code(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_codes() {
        let blank = vec![0.0f64; 9];
        let mut dot = blank.clone();
        dot[4] = 1.0;
        unsafe {
            assert_eq!(edtaa_validate(dot.as_ptr(), 3, 3), 0);
            assert_eq!(edtaa_validate(blank.as_ptr(), 3, 3), ERROR_UNIFORM);
            assert_eq!(edtaa_validate(dot.as_ptr(), 1, 9), ERROR_TOO_SMALL);
            assert_eq!(edtaa_validate(std::ptr::null(), 3, 3), ERROR_LENGTH_MISMATCH);
            // Product wraps around without the overflow check
            assert_eq!(
                edtaa_validate(dot.as_ptr(), usize::MAX / 2 + 1, 2),
                ERROR_LENGTH_MISMATCH
            );
        }
    }

    #[test]
    fn test_try_distance_map_codes() {
        let mut half = vec![0.0f64; 25];
        for y in 0..5 {
            half[y * 5 + 2] = 0.5;
        }
        let before = half.clone();

        let mut dot = vec![0.0f64; 9];
        dot[4] = 1.0;
        let mut expected = dot.clone();
        distance_map(&mut expected, 3, 3);

        unsafe {
            assert_eq!(edtaa_validate(half.as_ptr(), 5, 5), 0);
            assert_eq!(edtaa_try_distance_map(half.as_mut_ptr(), 5, 5), ERROR_DEGENERATE);
            assert_eq!(edtaa_try_distance_map(dot.as_mut_ptr(), 3, 3), 0);
            assert_eq!(
                edtaa_try_distance_map(std::ptr::null_mut(), 3, 3),
                ERROR_LENGTH_MISMATCH
            );
            assert_eq!(
                edtaa_try_distance_map(dot.as_mut_ptr(), usize::MAX, 3),
                ERROR_LENGTH_MISMATCH
            );
        }
        assert_eq!(half, before);
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_distance_map_through_ffi() {
        let mut data = vec![0.0f64; 9];
        data[4] = 1.0;
        let mut expected = data.clone();
        distance_map(&mut expected, 3, 3);

        unsafe { edtaa_distance_map(data.as_mut_ptr(), 3, 3) };
        assert_eq!(data, expected);
    }
}
