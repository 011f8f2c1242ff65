use super::{Point3, TOLERANCE};

/// Angle assigned to a vertex that coincides with one of its neighbours.
///
/// Such a vertex has no direction information, so its angle is a policy
/// choice rather than a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoincidentVertexPolicy {
    /// Reads as 180°: the vertex is straight and never a spike.
    #[default]
    Straight,
    /// Reads as 0°: the vertex is a fold and any positive threshold drops it.
    Collapse,
}

impl CoincidentVertexPolicy {
    /// The angle in degrees this policy assigns.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Straight => 180.0,
            Self::Collapse => 0.0,
        }
    }
}

/// Measures the angle at `curr` between the vectors to `prev` and `next`.
///
/// Returns degrees in `[0, 180]`, or `None` when `curr` coincides with a
/// neighbour (either vector shorter than [`TOLERANCE`]) or a coordinate is
/// not finite.
#[must_use]
pub fn vertex_angle(prev: &Point3, curr: &Point3, next: &Point3) -> Option<f64> {
    let u = prev - curr;
    let w = next - curr;
    if u.norm() < TOLERANCE || w.norm() < TOLERANCE {
        return None;
    }
    // Scale by the largest component so huge coordinates cannot overflow
    // the norms.
    let (scale_u, scale_w) = (u.amax(), w.amax());
    if !(scale_u.is_finite() && scale_w.is_finite()) {
        return None;
    }
    let u = u / scale_u;
    let w = w / scale_w;
    let cosine = u.dot(&w) / (u.norm() * w.norm());
    if !cosine.is_finite() {
        return None;
    }
    // Rounding can push the cosine just outside [-1, 1].
    Some(cosine.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Interior angle at `curr` in degrees, resolving coincident neighbours
/// through `policy`.
#[must_use]
pub fn angle_at(
    prev: &Point3,
    curr: &Point3,
    next: &Point3,
    policy: CoincidentVertexPolicy,
) -> f64 {
    vertex_angle(prev, curr, next).unwrap_or_else(|| policy.degrees())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn right_angle() {
        let angle = vertex_angle(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 0.0)).unwrap();
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_is_straight() {
        let angle = vertex_angle(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)).unwrap();
        assert_relative_eq!(angle, 180.0, epsilon = 1e-6);
    }

    #[test]
    fn backtrack_is_zero() {
        let angle = vertex_angle(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.5, 0.0)).unwrap();
        assert_relative_eq!(angle, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_in_3d() {
        let angle = vertex_angle(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn z_changes_the_angle() {
        // Flat in XY this would be a straight 180° vertex.
        let angle = vertex_angle(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 1.0),
            &Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn tiny_vectors_have_no_angle() {
        assert!(vertex_angle(&p(0.0, 0.0), &p(1e-11, 1e-11), &p(2e-11, 0.0)).is_none());
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let angle = vertex_angle(&p(0.0, 0.0), &p(1e300, 1e300), &p(2e300, 0.0)).unwrap();
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_coordinates_have_no_angle() {
        assert!(vertex_angle(&p(0.0, 0.0), &p(f64::INFINITY, 1.0), &p(2.0, 0.0)).is_none());
        assert!(vertex_angle(&p(f64::NAN, 0.0), &p(1.0, 1.0), &p(2.0, 0.0)).is_none());
        let angle = angle_at(
            &p(0.0, 0.0),
            &p(f64::INFINITY, 1.0),
            &p(2.0, 0.0),
            CoincidentVertexPolicy::Straight,
        );
        assert_relative_eq!(angle, 180.0);
    }

    #[test]
    fn coincident_straight_policy() {
        let a = p(0.0, 0.0);
        let angle = angle_at(&a, &a, &p(1.0, 0.0), CoincidentVertexPolicy::Straight);
        assert_relative_eq!(angle, 180.0);
    }

    #[test]
    fn coincident_collapse_policy() {
        let a = p(0.0, 0.0);
        let angle = angle_at(&p(1.0, 0.0), &a, &a, CoincidentVertexPolicy::Collapse);
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn policy_does_not_touch_measured_angles() {
        let angle = angle_at(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(2.0, 0.0),
            CoincidentVertexPolicy::Collapse,
        );
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }
}
