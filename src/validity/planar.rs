use geo::{Area, BooleanOps, Coord, LineString, RemoveRepeatedPoints, Validation};

use super::Validator;
use crate::geometry::{Dimension, Geometry, MultiPolygon, Polygon, Ring};
use crate::math::{Point3, TOLERANCE};

/// OGC validity evaluated in the XY plane (`z` is ignored).
///
/// Rings may touch each other at isolated points; crossings, shared
/// edges, misplaced holes and zero-area results are invalid.
///
/// Repair first drops repeated vertices. If the polygon is still invalid
/// it is rebuilt from the area it encloses with a boolean union, which
/// splits self-crossing rings into separate parts and discards zero-area
/// folds. A result with more than one part is returned as a
/// [`MultiPolygon`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarValidator;

impl Validator for PlanarValidator {
    fn is_valid(&self, polygon: &Polygon) -> bool {
        let planar = to_geo_polygon(polygon);
        Validation::is_valid(&planar) && planar.unsigned_area() > TOLERANCE
    }

    fn repair(&self, polygon: &Polygon) -> Option<Geometry> {
        let cleaned = to_geo_polygon(polygon).remove_repeated_points();
        if Validation::is_valid(&cleaned) && cleaned.unsigned_area() > TOLERANCE {
            return from_geo_polygon(&cleaned, polygon).map(Geometry::Polygon);
        }

        let rebuilt = geo::MultiPolygon::new(vec![cleaned]).union(&geo::MultiPolygon::new(vec![]));
        let mut parts = rebuilt
            .iter()
            .filter(|part| part.unsigned_area() > TOLERANCE)
            .map(|part| from_geo_polygon(part, polygon))
            .collect::<Option<Vec<_>>>()?;

        match parts.len() {
            0 => None,
            1 => parts.pop().map(Geometry::Polygon),
            _ => MultiPolygon::new(parts).ok().map(Geometry::MultiPolygon),
        }
    }
}

fn to_geo_ring(ring: &Ring) -> LineString<f64> {
    ring.points().iter().map(|p| (p.x, p.y)).collect()
}

fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(
        to_geo_ring(polygon.exterior()),
        polygon.interiors().iter().map(to_geo_ring).collect(),
    )
}

/// Restores `z` for a repaired coordinate from the nearest source vertex.
fn lift(coord: Coord<f64>, source: &Polygon) -> Point3 {
    if source.dimension() == Dimension::Xy {
        return Point3::new(coord.x, coord.y, 0.0);
    }
    let z = source
        .rings()
        .flat_map(Ring::vertices)
        .min_by(|a, b| {
            let da = (a.x - coord.x).hypot(a.y - coord.y);
            let db = (b.x - coord.x).hypot(b.y - coord.y);
            da.total_cmp(&db)
        })
        .map_or(0.0, |nearest| nearest.z);
    Point3::new(coord.x, coord.y, z)
}

fn from_geo_ring(ring: &LineString<f64>, source: &Polygon) -> Option<Ring> {
    let points = ring.coords().map(|&c| lift(c, source)).collect();
    Ring::new(points, source.dimension()).ok()
}

fn from_geo_polygon(planar: &geo::Polygon<f64>, source: &Polygon) -> Option<Polygon> {
    let exterior = from_geo_ring(planar.exterior(), source)?;
    let interiors = planar
        .interiors()
        .iter()
        .map(|hole| from_geo_ring(hole, source))
        .collect::<Option<Vec<_>>>()?;
    Some(Polygon::from_rings(exterior, interiors))
}
