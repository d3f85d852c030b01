/// Bilinear resampling of scalar fields.
///
/// Samples are taken at destination pixel centers mapped into source space,
/// with coordinates clamped to the outermost source pixel centers. Distance
/// fields interpolate well, which is what makes rendering a high resolution
/// field and scaling it down worthwhile.

pub fn resize_bilinear(
    src: &[f64],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<f64> {
    assert_eq!(src.len(), src_width * src_height, "source buffer size");
    assert!(
        src_width > 0 && src_height > 0,
        "cannot resample an empty field"
    );

    let sx = src_width as f64 / dst_width as f64;
    let sy = src_height as f64 / dst_height as f64;
    let max_x = (src_width - 1) as f64;
    let max_y = (src_height - 1) as f64;

    let mut output = vec![0.0; dst_width * dst_height];

    for y in 0..dst_height {
        let fy = ((y as f64 + 0.5) * sy - 0.5).clamp(0.0, max_y);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(src_height - 1);
        let ay = fy - y0 as f64;

        for x in 0..dst_width {
            let fx = ((x as f64 + 0.5) * sx - 0.5).clamp(0.0, max_x);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(src_width - 1);
            let ax = fx - x0 as f64;

            let tl = src[y0 * src_width + x0];
            let tr = src[y0 * src_width + x1];
            let bl = src[y1 * src_width + x0];
            let br = src[y1 * src_width + x1];

            let top = tl * (1.0 - ax) + tr * ax;
            let bottom = bl * (1.0 - ax) + br * ax;
            output[y * dst_width + x] = top * (1.0 - ay) + bottom * ay;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_size_is_unchanged() {
        let src = vec![0.0, 0.25, 0.5, 0.75, 1.0, 0.1];
        let out = resize_bilinear(&src, 3, 2, 3, 2);
        for (a, b) in out.iter().zip(&src) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_field_stays_constant() {
        let src = vec![0.7; 64];
        let out = resize_bilinear(&src, 8, 8, 3, 5);
        assert_eq!(out.len(), 15);
        assert!(out.iter().all(|&v| (v - 0.7).abs() < 1e-12));
    }

    #[test]
    fn test_halving_averages_pairs() {
        // 4x1 -> 2x1 samples land exactly between source pixels
        let src = vec![0.0, 1.0, 2.0, 3.0];
        let out = resize_bilinear(&src, 4, 1, 2, 1);
        assert!((out[0] - 0.5).abs() < 1e-12);
        assert!((out[1] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_linear_ramp_preserved_inside() {
        let w = 9;
        let src: Vec<f64> = (0..w).map(|x| x as f64).collect();
        let out = resize_bilinear(&src, w, 1, 3, 1);
        // Centers of 3 output pixels map to source x = 1, 4, 7
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 4.0).abs() < 1e-12);
        assert!((out[2] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_upscale_clamps_at_borders() {
        let src = vec![0.0, 1.0];
        let out = resize_bilinear(&src, 2, 1, 4, 1);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[3], 1.0);
        assert!(out[1] > 0.0 && out[1] < out[2] && out[2] < 1.0);
    }
}
