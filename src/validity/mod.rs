mod planar;

pub use planar::PlanarValidator;

use crate::geometry::{Geometry, Polygon};

/// Validity check and repair capability used by the polygon processor.
///
/// The processor only orchestrates these calls; the rules belong to the
/// implementation.
pub trait Validator {
    /// Whether `polygon` is a valid, non-empty area.
    fn is_valid(&self, polygon: &Polygon) -> bool;

    /// Attempts to turn an invalid polygon into a valid area.
    ///
    /// The result may be split into several parts. Returns `None` when
    /// nothing with a non-zero area remains.
    fn repair(&self, polygon: &Polygon) -> Option<Geometry>;
}
