use super::{Dimension, Ring};
use crate::error::{GeometryError, Result};

/// One exterior ring plus zero or more holes, all of the same dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MixedDimension` if any hole differs in
    /// dimension from the exterior ring.
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Result<Self> {
        if interiors
            .iter()
            .any(|hole| hole.dimension() != exterior.dimension())
        {
            return Err(GeometryError::MixedDimension.into());
        }
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// Reassembles a polygon from rings derived from an existing polygon.
    pub(crate) fn from_rings(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    #[must_use]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    #[must_use]
    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }

    /// Exterior followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.exterior.dimension()
    }
}

/// A non-empty ordered collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a multipolygon.
    ///
    /// # Errors
    ///
    /// - `GeometryError::EmptyMultiPolygon` if `polygons` is empty
    /// - `GeometryError::MixedDimension` if members differ in dimension
    pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
        let Some(first) = polygons.first() else {
            return Err(GeometryError::EmptyMultiPolygon.into());
        };
        let dimension = first.dimension();
        if polygons.iter().any(|p| p.dimension() != dimension) {
            return Err(GeometryError::MixedDimension.into());
        }
        Ok(Self { polygons })
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.polygons[0].dimension()
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            polygons: vec![polygon],
        }
    }
}

/// The geometries the spike filter operates on.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Polygon(p) => p.dimension(),
            Self::MultiPolygon(mp) => mp.dimension(),
        }
    }

    /// Promotes the geometry to a multipolygon.
    #[must_use]
    pub fn into_multi_polygon(self) -> MultiPolygon {
        match self {
            Self::Polygon(p) => p.into(),
            Self::MultiPolygon(mp) => mp,
        }
    }
}
