use super::Dimension;
use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// Minimum number of distinct vertices for a ring to bound an area.
pub const MIN_RING_VERTICES: usize = 3;

/// A closed boundary: an ordered loop of points whose first and last
/// entries are equal.
///
/// Rings are immutable; transforms build new rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point3>,
    dimension: Dimension,
}

impl Ring {
    /// Creates a ring from explicitly closed points.
    ///
    /// # Errors
    ///
    /// - `GeometryError::RingTooShort` if fewer than 4 points are given
    /// - `GeometryError::RingNotClosed` if the first and last points differ
    pub fn new(points: Vec<Point3>, dimension: Dimension) -> Result<Self> {
        if points.len() < MIN_RING_VERTICES + 1 {
            return Err(GeometryError::RingTooShort(points.len()).into());
        }
        if points.first() != points.last() {
            return Err(GeometryError::RingNotClosed.into());
        }
        Ok(Self { points, dimension })
    }

    /// Builds a ring from distinct vertices by appending a copy of the first.
    ///
    /// Callers guarantee at least [`MIN_RING_VERTICES`] vertices.
    pub(crate) fn from_vertices(mut vertices: Vec<Point3>, dimension: Dimension) -> Self {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        Self {
            points: vertices,
            dimension,
        }
    }

    /// All points, including the closing point.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// The distinct vertices, without the closing point.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Whether `ring[0] == ring[last]`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }
}
