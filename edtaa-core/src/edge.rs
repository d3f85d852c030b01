/// Sub-pixel distance from a pixel center to a straight edge crossing it.
///
/// Given the edge normal and the fractional coverage `a` of the pixel, inverts
/// the area of a unit square cut by a half-plane. The result is positive when
/// the pixel center lies outside the shape (a < 0.5).
use cgmath::{InnerSpace, Vector2};

/// Estimate the signed distance to the edge through a pixel.
///
/// `gradient` does not need to be normalized. If either component is zero the
/// edge is axis aligned (or unknown) and the linear estimate `0.5 - a` is used.
pub fn edge_distance(gradient: Vector2<f64>, a: f64) -> f64 {
    if gradient.x == 0.0 || gradient.y == 0.0 {
        return 0.5 - a;
    }

    let inv_len = 1.0 / gradient.magnitude2().sqrt();
    assert!(inv_len > 0.0, "gradient length must be finite");

    // Symmetric under sign and transposition: reduce to gx >= gy >= 0.
    let mut gx = (gradient.x * inv_len).abs();
    let mut gy = (gradient.y * inv_len).abs();
    if gx < gy {
        std::mem::swap(&mut gx, &mut gy);
    }

    let a1 = 0.5 * gy / gx;
    if a < a1 {
        // Corner triangle is covered
        0.5 * (gx + gy) - (2.0 * gx * gy * a).sqrt()
    } else if a < 1.0 - a1 {
        // Edge crosses two opposite sides
        (0.5 - a) * gx
    } else {
        // Corner triangle is uncovered
        -0.5 * (gx + gy) + (2.0 * gx * gy * (1.0 - a)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_axis_aligned_is_linear() {
        for &a in &[0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(edge_distance(Vector2::new(1.0, 0.0), a), 0.5 - a);
            assert_eq!(edge_distance(Vector2::new(0.0, -3.0), a), 0.5 - a);
            assert_eq!(edge_distance(Vector2::new(0.0, 0.0), a), 0.5 - a);
        }
    }

    #[test]
    fn test_sign_symmetry() {
        let g = Vector2::new(0.8, 0.3);
        for &a in &[0.05, 0.2, 0.5, 0.7, 0.97] {
            let d = edge_distance(g, a);
            assert!((d - edge_distance(-g, a)).abs() < EPS);
            assert!((d - edge_distance(Vector2::new(-g.x, g.y), a)).abs() < EPS);
            assert!((d - edge_distance(Vector2::new(g.x, -g.y), a)).abs() < EPS);
        }
    }

    #[test]
    fn test_transpose_symmetry() {
        let g = Vector2::new(2.0, 0.5);
        for &a in &[0.01, 0.3, 0.5, 0.8, 0.99] {
            let d = edge_distance(g, a);
            assert!((d - edge_distance(Vector2::new(g.y, g.x), a)).abs() < EPS);
        }
    }

    #[test]
    fn test_scale_invariant() {
        let a = 0.35;
        let d1 = edge_distance(Vector2::new(1.0, 2.0), a);
        let d2 = edge_distance(Vector2::new(10.0, 20.0), a);
        assert!((d1 - d2).abs() < EPS);
    }

    #[test]
    fn test_half_coverage_is_on_edge() {
        assert!(edge_distance(Vector2::new(1.0, 0.4), 0.5).abs() < EPS);
        assert!(edge_distance(Vector2::new(1.0, 1.0), 0.5).abs() < EPS);
    }

    #[test]
    fn test_diagonal_extremes() {
        // 45 degree edge: a pixel that is barely covered sits sqrt(2)/2 outside
        let g = Vector2::new(1.0, 1.0);
        let half_diag = std::f64::consts::FRAC_1_SQRT_2;
        assert!((edge_distance(g, 0.0) - half_diag).abs() < EPS);
        assert!((edge_distance(g, 1.0) + half_diag).abs() < EPS);
    }

    #[test]
    fn test_branches_are_continuous() {
        let g = Vector2::new(1.0, 0.5);
        let gx = 1.0 / 1.25f64.sqrt();
        let gy = 0.5 * gx;
        let a1 = 0.5 * gy / gx;
        let below = edge_distance(g, a1 - 1e-9);
        let above = edge_distance(g, a1 + 1e-9);
        assert!((below - above).abs() < 1e-6);

        let below = edge_distance(g, 1.0 - a1 - 1e-9);
        let above = edge_distance(g, 1.0 - a1 + 1e-9);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_decreases_with_coverage() {
        let g = Vector2::new(0.6, 0.8);
        let mut prev = f64::INFINITY;
        for step in 0..=20 {
            let d = edge_distance(g, step as f64 / 20.0);
            assert!(d < prev);
            prev = d;
        }
    }
}
