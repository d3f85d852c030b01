/// Distance estimate from a pixel to a known edge pixel elsewhere in the image.
///
/// Combines the integer grid distance of the propagation offset with the
/// sub-pixel edge estimate at the source pixel. Far from the edge the integer
/// term dominates; right at the edge only the local gradient is used.
use cgmath::{InnerSpace, Vector2};

use crate::edge::edge_distance;
use crate::UNSET_DISTANCE;

/// Estimate the distance implied by pointing at `closest` through `offset`.
///
/// Returns [`UNSET_DISTANCE`] when the source pixel has no coverage, meaning
/// it cannot anchor a distance yet.
pub fn directional_distance(
    coverage: &[f64],
    gradients: &[Vector2<f64>],
    closest: usize,
    offset: Vector2<i32>,
) -> f64 {
    let a = coverage[closest].clamp(0.0, 1.0);
    if a == 0.0 {
        return UNSET_DISTANCE;
    }

    if offset.x == 0 && offset.y == 0 {
        return edge_distance(gradients[closest], a);
    }

    // The offset doubles as the gradient direction, accurate for long offsets
    let direction = Vector2::new(offset.x as f64, offset.y as f64);
    direction.magnitude2().sqrt() + edge_distance(direction, a)
}
