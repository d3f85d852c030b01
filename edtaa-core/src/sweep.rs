/// Gradient-assisted 8-point sequential Euclidean distance transform.
///
/// Each pass scans the image twice: top to bottom propagating from above
/// and the left/right neighbors, then bottom to top propagating from below and
/// the right/left neighbors. Passes repeat until one makes no update. A
/// pixel's estimate only ever decreases, by more than [`SWEEP_EPSILON`] per
/// update, which is what guarantees termination.
use cgmath::Vector2;

use crate::directional::directional_distance;
use crate::edge::edge_distance;
use crate::{SWEEP_EPSILON, UNSET_DISTANCE};

/// Neighbor positions relative to the pixel being relaxed, in visiting order.
type Neighbors = [(isize, isize)];

// Downward scan, propagating from above and from the left
const DOWN_FIRST: &Neighbors = &[(0, -1), (1, -1)];
const DOWN_MIDDLE: &Neighbors = &[(-1, 0), (-1, -1), (0, -1), (1, -1)];
const DOWN_LAST: &Neighbors = &[(-1, 0), (-1, -1), (0, -1)];
const FROM_RIGHT: &Neighbors = &[(1, 0)];

// Upward scan, propagating from below and from the right
const UP_LAST: &Neighbors = &[(0, 1), (-1, 1)];
const UP_MIDDLE: &Neighbors = &[(1, 0), (1, 1), (0, 1), (-1, 1)];
const UP_FIRST: &Neighbors = &[(1, 0), (1, 1), (0, 1)];
const FROM_LEFT: &Neighbors = &[(-1, 0)];

/// Counters describing how a sweep converged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Full passes run, including the final pass that changed nothing.
    pub passes: usize,
    /// Total number of adopted candidates.
    pub updates: usize,
}

/// Final state of a converged sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Unsigned distance per pixel (may hold small negative residues at edges).
    pub distances: Vec<f64>,
    /// Offset from each pixel's closest known edge pixel to the pixel itself.
    pub offsets: Vec<Vector2<i32>>,
    pub stats: SweepStats,
}

/// Relaxation state for one unsigned distance transform.
pub struct SweepEngine<'a> {
    coverage: &'a [f64],
    gradients: &'a [Vector2<f64>],
    width: usize,
    height: usize,
    offsets: Vec<Vector2<i32>>,
    distances: Vec<f64>,
    stats: SweepStats,
}

impl<'a> SweepEngine<'a> {
    /// Seed the distance field from coverage.
    ///
    /// Background pixels start unset, fully covered pixels at zero and edge
    /// pixels at their local gradient estimate. Every pixel initially points
    /// at itself.
    pub fn new(
        coverage: &'a [f64],
        gradients: &'a [Vector2<f64>],
        width: usize,
        height: usize,
    ) -> Self {
        assert!(
            width > 1 && height > 1,
            "sweep needs an image of at least 2x2, got {}x{}",
            width,
            height
        );
        assert_eq!(coverage.len(), width * height, "coverage buffer size");
        assert_eq!(gradients.len(), width * height, "gradient buffer size");

        let distances = coverage
            .iter()
            .zip(gradients)
            .map(|(&v, &g)| {
                if v <= 0.0 {
                    UNSET_DISTANCE
                } else if v < 1.0 {
                    edge_distance(g, v)
                } else {
                    0.0
                }
            })
            .collect();

        Self {
            coverage,
            gradients,
            width,
            height,
            offsets: vec![Vector2::new(0, 0); width * height],
            distances,
            stats: SweepStats::default(),
        }
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn offsets(&self) -> &[Vector2<i32>] {
        &self.offsets
    }

    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    /// Run one full pass over the image and return how many updates it made.
    pub fn pass(&mut self) -> usize {
        let w = self.width;
        let h = self.height;
        let mut updates = 0;

        for y in 1..h {
            updates += self.relax(0, y, DOWN_FIRST);
            for x in 1..w - 1 {
                updates += self.relax(x, y, DOWN_MIDDLE);
            }
            updates += self.relax(w - 1, y, DOWN_LAST);

            // Rightmost pixel has no right neighbor
            for x in (0..w - 1).rev() {
                updates += self.relax(x, y, FROM_RIGHT);
            }
        }

        for y in (0..h - 1).rev() {
            updates += self.relax(w - 1, y, UP_LAST);
            for x in (1..w - 1).rev() {
                updates += self.relax(x, y, UP_MIDDLE);
            }
            updates += self.relax(0, y, UP_FIRST);

            // Leftmost pixel has no left neighbor
            for x in 1..w {
                updates += self.relax(x, y, FROM_LEFT);
            }
        }

        self.stats.passes += 1;
        self.stats.updates += updates;
        log::trace!("sweep pass {}: {} updates", self.stats.passes, updates);
        updates
    }

    /// Sweep until a pass makes no update.
    pub fn run(mut self) -> SweepResult {
        while self.pass() > 0 {}

        log::debug!(
            "sweep {}x{} converged after {} passes ({} updates)",
            self.width,
            self.height,
            self.stats.passes,
            self.stats.updates
        );

        SweepResult {
            distances: self.distances,
            offsets: self.offsets,
            stats: self.stats,
        }
    }

    /// Try to improve pixel (x, y) from each neighbor in turn.
    ///
    /// Later neighbors compete against whatever an earlier one adopted.
    fn relax(&mut self, x: usize, y: usize, neighbors: &Neighbors) -> usize {
        let i = y * self.width + x;
        let mut best = self.distances[i];
        if best <= 0.0 {
            return 0;
        }

        let mut updates = 0;
        for &(dx, dy) in neighbors {
            let c = (y as isize + dy) as usize * self.width + (x as isize + dx) as usize;
            let offset = self.offsets[c] + Vector2::new(-dx as i32, -dy as i32);
            let closest = self.closest_index(x, y, offset);
            let candidate = directional_distance(self.coverage, self.gradients, closest, offset);
            if candidate < best - SWEEP_EPSILON {
                best = candidate;
                self.distances[i] = candidate;
                self.offsets[i] = offset;
                updates += 1;
            }
        }
        updates
    }

    fn closest_index(&self, x: usize, y: usize, offset: Vector2<i32>) -> usize {
        let cx = x as i64 - offset.x as i64;
        let cy = y as i64 - offset.y as i64;
        assert!(
            cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height,
            "offset ({}, {}) at pixel ({}, {}) points outside the {}x{} image",
            offset.x,
            offset.y,
            x,
            y,
            self.width,
            self.height
        );
        cy as usize * self.width + cx as usize
    }
}

/// Compute the unsigned distance field of `coverage` to a fixed point.
pub fn relax(
    coverage: &[f64],
    gradients: &[Vector2<f64>],
    width: usize,
    height: usize,
) -> SweepResult {
    SweepEngine::new(coverage, gradients, width, height).run()
}
