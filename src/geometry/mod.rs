pub mod polygon;
pub mod ring;

pub use polygon::{Geometry, MultiPolygon, Polygon};
pub use ring::Ring;

use crate::error::{GeometryError, Result};

/// Coordinate dimensionality, fixed for every ring of one geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// `(x, y)` positions, stored with `z = 0`.
    Xy,
    /// `(x, y, z)` positions.
    Xyz,
}

/// Geometry tags the processor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Polygon,
    MultiPolygon,
}

impl GeometryType {
    /// Resolves an external geometry tag.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedType` for any tag other than
    /// `Polygon` or `MultiPolygon`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Polygon" => Ok(Self::Polygon),
            "MultiPolygon" => Ok(Self::MultiPolygon),
            other => Err(GeometryError::UnsupportedType(other.to_owned()).into()),
        }
    }
}
