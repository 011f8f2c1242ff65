use tracing::debug;

use crate::config::UnspikeConfig;
use crate::geometry::ring::MIN_RING_VERTICES;
use crate::geometry::Ring;
use crate::math::angle::{angle_at, CoincidentVertexPolicy};
use crate::math::Point3;

/// Removes spike vertices from a single closed ring.
///
/// # Algorithm
///
/// 1. Drop the closing point, leaving `n` distinct vertices treated as a cycle
/// 2. Measure the angle at every vertex against its cyclic neighbours
/// 3. Keep vertex `i` iff its angle is `>= threshold`
/// 4. If fewer than three vertices would remain, return the ring untouched
///    and report the guard
/// 5. Re-close the ring on its first surviving vertex
///
/// All angles are measured on the input ring, so a single pass never
/// re-evaluates a vertex against a neighbour that was just removed.
#[derive(Debug, Clone, Copy)]
pub struct RingFilter {
    threshold: f64,
    coincident: CoincidentVertexPolicy,
}

/// Result of filtering one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFilterResult {
    /// The filtered ring, closed.
    pub ring: Ring,
    /// Number of vertices removed.
    pub removed: usize,
    /// Whether the minimum-vertex guard left the ring unfiltered.
    pub guarded: bool,
}

impl RingFilter {
    /// Creates a filter for the given threshold in degrees.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            coincident: CoincidentVertexPolicy::default(),
        }
    }

    /// Creates a filter from a validated configuration.
    #[must_use]
    pub fn from_config(config: &UnspikeConfig) -> Self {
        Self::new(config.threshold.degrees()).with_coincident_policy(config.coincident)
    }

    #[must_use]
    pub fn with_coincident_policy(mut self, policy: CoincidentVertexPolicy) -> Self {
        self.coincident = policy;
        self
    }

    /// Filters `ring`, returning a new closed ring and the removal count.
    #[must_use]
    pub fn execute(&self, ring: &Ring) -> RingFilterResult {
        let vertices = ring.vertices();
        let n = vertices.len();

        let retained: Vec<Point3> = (0..n)
            .filter(|&i| {
                let prev = &vertices[(i + n - 1) % n];
                let next = &vertices[(i + 1) % n];
                angle_at(prev, &vertices[i], next, self.coincident) >= self.threshold
            })
            .map(|i| vertices[i])
            .collect();

        if retained.len() < MIN_RING_VERTICES {
            debug!(
                vertices = n,
                retained = retained.len(),
                "ring would degenerate, leaving it unfiltered"
            );
            return RingFilterResult {
                ring: ring.clone(),
                removed: 0,
                guarded: true,
            };
        }

        let removed = n - retained.len();
        if removed == 0 {
            return RingFilterResult {
                ring: ring.clone(),
                removed,
                guarded: false,
            };
        }

        debug!(removed, vertices = n, threshold = self.threshold, "removed spikes");
        // Retained vertices keep input order, so the ring restarts on the
        // first survivor when vertex 0 was a spike.
        RingFilterResult {
            ring: Ring::from_vertices(retained, ring.dimension()),
            removed,
            guarded: false,
        }
    }
}
