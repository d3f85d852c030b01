/// Local edge-normal estimation for anti-aliased coverage images.
///
/// Sobel-style 3x3 kernel with axis weights of sqrt(2) and diagonal weights of 1:
/// ```text
///  gx:  -1   0  +1       gy:  -1  -r2  -1
///      -r2   0  +r2             0    0   0
///       -1   0  +1             +1  +r2  +1
/// ```
/// Only edge pixels (0 < v < 1) get a gradient, the rest stay zero.
use cgmath::{InnerSpace, Vector2};

/// Compute unit gradients at every edge pixel of `coverage`.
///
/// The outermost pixel ring is left at zero where the kernel would spill over
/// the image. That costs some accuracy in a 1-pixel frame around the image,
/// so callers that care should pad their input.
pub fn compute_gradient(coverage: &[f64], width: usize, height: usize) -> Vec<Vector2<f64>> {
    assert!(
        width > 1 && height > 1,
        "gradient needs an image of at least 2x2, got {}x{}",
        width,
        height
    );
    assert_eq!(coverage.len(), width * height, "coverage buffer size");

    let mut gradients = vec![Vector2::new(0.0, 0.0); coverage.len()];
    let w = width;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let i = y * w + x;
            let v = coverage[i];
            if v <= 0.0 || v >= 1.0 {
                continue;
            }

            let tl = coverage[i - w - 1];
            let tc = coverage[i - w];
            let tr = coverage[i - w + 1];
            let ml = coverage[i - 1];
            let mr = coverage[i + 1];
            let bl = coverage[i + w - 1];
            let bc = coverage[i + w];
            let br = coverage[i + w + 1];

            // gy is the transposed gx kernel. Sharing the x corner term here
            // skews the normal on diagonal edges.
            let mut g = Vector2::new(
                -tl - std::f64::consts::SQRT_2 * ml - bl
                    + tr
                    + std::f64::consts::SQRT_2 * mr
                    + br,
                -tl - std::f64::consts::SQRT_2 * tc - tr
                    + bl
                    + std::f64::consts::SQRT_2 * bc
                    + br,
            );

            let len2 = g.magnitude2();
            if len2 > 0.0 {
                g /= len2.sqrt();
            }
            gradients[i] = g;
        }
    }

    gradients
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_uniform_edge_has_zero_gradient() {
        let coverage = vec![0.3; 25];
        let g = compute_gradient(&coverage, 5, 5);
        assert!(g.iter().all(|v| v.x == 0.0 && v.y == 0.0));
    }

    #[test]
    fn test_vertical_edge_points_right() {
        // Coverage rises to the right through a column of half-covered pixels
        #[rustfmt::skip]
        let coverage = vec![
            0.0, 0.5, 1.0,
            0.0, 0.5, 1.0,
            0.0, 0.5, 1.0,
        ];
        let g = compute_gradient(&coverage, 3, 3);
        let c = g[4];
        assert!(approx(c.x, 1.0));
        assert!(approx(c.y, 0.0));
    }

    #[test]
    fn test_horizontal_edge_points_down() {
        #[rustfmt::skip]
        let coverage = vec![
            0.0, 0.0, 0.0,
            0.5, 0.5, 0.5,
            1.0, 1.0, 1.0,
        ];
        let g = compute_gradient(&coverage, 3, 3);
        assert!(approx(g[4].x, 0.0));
        assert!(approx(g[4].y, 1.0));
    }

    #[test]
    fn test_diagonal_edge_is_unit_length() {
        #[rustfmt::skip]
        let coverage = vec![
            0.0, 0.0, 0.2,
            0.0, 0.4, 1.0,
            0.3, 1.0, 1.0,
        ];
        let g = compute_gradient(&coverage, 3, 3);
        assert!(approx(g[4].magnitude(), 1.0));
        assert!(g[4].x > 0.0 && g[4].y > 0.0);
    }

    #[test]
    fn test_transposed_image_swaps_components() {
        #[rustfmt::skip]
        let coverage = vec![
            0.0, 0.1, 0.6,
            0.0, 0.5, 1.0,
            0.2, 0.9, 1.0,
        ];
        let transposed: Vec<f64> = (0..9).map(|i| coverage[(i % 3) * 3 + i / 3]).collect();

        let g = compute_gradient(&coverage, 3, 3)[4];
        let t = compute_gradient(&transposed, 3, 3)[4];
        assert!(approx(g.x, t.y));
        assert!(approx(g.y, t.x));

        // A 45 degree edge gets a 45 degree normal
        #[rustfmt::skip]
        let diagonal = vec![
            0.0, 0.0, 0.3,
            0.0, 0.5, 1.0,
            0.3, 1.0, 1.0,
        ];
        let d = compute_gradient(&diagonal, 3, 3)[4];
        assert!(approx(d.x, d.y));
    }

    #[test]
    fn test_border_and_solid_pixels_stay_zero() {
        #[rustfmt::skip]
        let coverage = vec![
            0.5, 0.5, 0.5, 0.5,
            0.5, 1.0, 0.0, 0.5,
            0.5, 0.5, 0.5, 0.5,
        ];
        let g = compute_gradient(&coverage, 4, 3);
        for (i, v) in g.iter().enumerate() {
            assert_eq!((v.x, v.y), (0.0, 0.0), "pixel {}", i);
        }
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn test_rejects_single_row() {
        compute_gradient(&[0.0, 1.0, 0.0], 3, 1);
    }
}
