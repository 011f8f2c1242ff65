use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::{GeometryError, IoError, Result};
use crate::geometry::{Dimension, Geometry, GeometryType, MultiPolygon, Polygon, Ring};
use crate::math::Point3;

/// One input feature. The geometry is kept as a per-feature result so a
/// bad geometry skips only its own feature.
#[derive(Debug)]
pub struct Feature {
    pub id: Option<Value>,
    pub properties: Value,
    pub geometry: Result<Geometry>,
}

/// A decoded feature collection.
#[derive(Debug)]
pub struct FeatureCollection {
    /// Opaque coordinate reference metadata.
    pub crs: Option<Value>,
    pub features: Vec<Feature>,
}

fn file_error(path: &Path, source: std::io::Error) -> IoError {
    IoError::File {
        path: path.display().to_string(),
        source,
    }
}

/// Reads a feature collection from a GeoJSON file.
///
/// # Errors
///
/// Returns an `IoError` if the file cannot be read or is not a GeoJSON
/// `FeatureCollection`.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let text = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    parse_feature_collection(&text)
}

/// Parses a feature collection from GeoJSON text.
///
/// # Errors
///
/// Returns an `IoError` if the text is not a GeoJSON `FeatureCollection`.
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    let root: Value = serde_json::from_str(text).map_err(IoError::from)?;
    if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(IoError::Format("root object is not a FeatureCollection".to_owned()).into());
    }
    let Some(items) = root.get("features").and_then(Value::as_array) else {
        return Err(IoError::Format("missing \"features\" array".to_owned()).into());
    };

    let features = items
        .iter()
        .map(|item| Feature {
            id: item.get("id").cloned(),
            properties: item.get("properties").cloned().unwrap_or(Value::Null),
            geometry: item
                .get("geometry")
                .map_or_else(|| Err(malformed("feature has no geometry")), parse_geometry),
        })
        .collect();

    Ok(FeatureCollection {
        crs: root.get("crs").cloned(),
        features,
    })
}

fn malformed(message: &str) -> crate::error::UnspikeError {
    GeometryError::MalformedCoordinates(message.to_owned()).into()
}

/// Decodes a GeoJSON geometry object.
///
/// # Errors
///
/// - `GeometryError::UnsupportedType` for any type other than `Polygon` or
///   `MultiPolygon` (including `null` geometries)
/// - other `GeometryError`s for malformed coordinates
pub fn parse_geometry(value: &Value) -> Result<Geometry> {
    let kind = match value {
        Value::Null => "null",
        _ => value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("geometry has no type"))?,
    };
    let geometry_type = GeometryType::from_name(kind)?;
    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| malformed("geometry has no coordinates"))?;

    match geometry_type {
        GeometryType::Polygon => Ok(Geometry::Polygon(parse_polygon(coordinates)?)),
        GeometryType::MultiPolygon => {
            let polygons = as_array(coordinates, "multipolygon")?
                .iter()
                .map(parse_polygon)
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::MultiPolygon(MultiPolygon::new(polygons)?))
        }
    }
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| malformed(&format!("{what} coordinates are not an array")))
}

fn parse_polygon(value: &Value) -> Result<Polygon> {
    let mut rings = as_array(value, "polygon")?
        .iter()
        .map(parse_ring)
        .collect::<Result<Vec<_>>>()?
        .into_iter();
    let exterior = rings.next().ok_or_else(|| malformed("polygon has no rings"))?;
    Polygon::new(exterior, rings.collect())
}

fn parse_ring(value: &Value) -> Result<Ring> {
    let mut dimension = None;
    let mut points = Vec::new();
    for position in as_array(value, "ring")? {
        let (point, dim) = parse_position(position)?;
        match dimension {
            None => dimension = Some(dim),
            Some(d) if d != dim => return Err(GeometryError::MixedDimension.into()),
            Some(_) => {}
        }
        points.push(point);
    }
    Ring::new(points, dimension.unwrap_or(Dimension::Xy))
}

fn parse_position(value: &Value) -> Result<(Point3, Dimension)> {
    let ordinates = as_array(value, "position")?
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| malformed("position has a non-numeric ordinate")))
        .collect::<Result<Vec<f64>>>()?;
    match ordinates.as_slice() {
        [x, y] => Ok((Point3::new(*x, *y, 0.0), Dimension::Xy)),
        [x, y, z, ..] => Ok((Point3::new(*x, *y, *z), Dimension::Xyz)),
        _ => Err(malformed("position has fewer than two ordinates")),
    }
}

fn position_to_value(point: &Point3, dimension: Dimension) -> Value {
    match dimension {
        Dimension::Xy => json!([point.x, point.y]),
        Dimension::Xyz => json!([point.x, point.y, point.z]),
    }
}

fn ring_to_value(ring: &Ring) -> Value {
    Value::Array(
        ring.points()
            .iter()
            .map(|p| position_to_value(p, ring.dimension()))
            .collect(),
    )
}

/// Encodes a multipolygon as a GeoJSON geometry object.
#[must_use]
pub fn multi_polygon_to_value(multi: &MultiPolygon) -> Value {
    let coordinates: Vec<Value> = multi
        .polygons()
        .iter()
        .map(|polygon| Value::Array(polygon.rings().map(ring_to_value).collect()))
        .collect();
    json!({ "type": "MultiPolygon", "coordinates": coordinates })
}

/// Collects output features and writes them as one `FeatureCollection`.
///
/// Feature ids, properties and the input `crs` member are carried through
/// untouched. Geometries are always written as `MultiPolygon` so every
/// feature of a collection shares one geometry type.
#[derive(Debug, Default)]
pub struct FeatureWriter {
    crs: Option<Value>,
    features: Vec<Value>,
}

impl FeatureWriter {
    /// Creates a writer that re-emits `crs` unchanged.
    #[must_use]
    pub fn new(crs: Option<Value>) -> Self {
        Self {
            crs,
            features: Vec::new(),
        }
    }

    /// Appends a feature; the geometry is promoted to a multipolygon.
    pub fn push(&mut self, id: Option<&Value>, properties: &Value, geometry: Geometry) {
        let mut feature = Map::new();
        feature.insert("type".to_owned(), json!("Feature"));
        if let Some(id) = id {
            feature.insert("id".to_owned(), id.clone());
        }
        feature.insert("properties".to_owned(), properties.clone());
        feature.insert(
            "geometry".to_owned(),
            multi_polygon_to_value(&geometry.into_multi_polygon()),
        );
        self.features.push(Value::Object(feature));
    }

    /// The collection as a GeoJSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert("type".to_owned(), json!("FeatureCollection"));
        if let Some(crs) = &self.crs {
            root.insert("crs".to_owned(), crs.clone());
        }
        root.insert("features".to_owned(), Value::Array(self.features.clone()));
        Value::Object(root)
    }

    /// Writes the collection to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if the file cannot be created or written.
    pub fn finish(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| file_error(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.to_value()).map_err(IoError::from)?;
        writer.flush().map_err(|e| file_error(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::UnspikeError;

    fn collection(geometry: &Value) -> String {
        json!({
            "type": "FeatureCollection",
            "crs": { "type": "name", "properties": { "name": "EPSG:3857" } },
            "features": [
                { "type": "Feature", "id": 7, "properties": { "name": "a" }, "geometry": geometry }
            ]
        })
        .to_string()
    }

    #[test]
    fn reads_polygon_with_hole() {
        let text = collection(&json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
                [[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 2.0]]
            ]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(fc.features[0].id, Some(json!(7)));
        assert_eq!(fc.features[0].properties, json!({ "name": "a" }));
        let Ok(Geometry::Polygon(polygon)) = &fc.features[0].geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.dimension(), Dimension::Xy);
        assert!(fc.crs.is_some());
    }

    #[test]
    fn reads_3d_multipolygon() {
        let text = collection(&json!({
            "type": "MultiPolygon",
            "coordinates": [[
                [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 2.0], [0.0, 0.0, 1.0]]
            ]]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        let Ok(Geometry::MultiPolygon(multi)) = &fc.features[0].geometry else {
            panic!("expected a multipolygon");
        };
        assert_eq!(multi.dimension(), Dimension::Xyz);
        assert_eq!(multi.polygons()[0].exterior().points()[2], Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn line_geometry_is_unsupported() {
        let text = collection(&json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [1.0, 1.0]]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        assert!(matches!(
            &fc.features[0].geometry,
            Err(UnspikeError::Geometry(GeometryError::UnsupportedType(t))) if t == "LineString"
        ));
    }

    #[test]
    fn mixed_dimension_ring_is_rejected() {
        let text = collection(&json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0, 5.0], [1.0, 1.0], [0.0, 0.0]]]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        assert!(matches!(
            &fc.features[0].geometry,
            Err(UnspikeError::Geometry(GeometryError::MixedDimension))
        ));
    }

    #[test]
    fn open_ring_is_rejected() {
        let text = collection(&json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        assert!(matches!(
            &fc.features[0].geometry,
            Err(UnspikeError::Geometry(GeometryError::RingNotClosed))
        ));
    }

    #[test]
    fn rejects_non_collection() {
        let err = parse_feature_collection(r#"{"type": "Feature"}"#);
        assert!(matches!(err, Err(UnspikeError::Io(IoError::Format(_)))));
        let err = parse_feature_collection("not json");
        assert!(matches!(err, Err(UnspikeError::Io(IoError::Json(_)))));
    }

    #[test]
    fn writer_promotes_to_multipolygon() {
        let text = collection(&json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        }));
        let fc = parse_feature_collection(&text).unwrap();
        let feature = fc.features.into_iter().next().unwrap();

        let mut writer = FeatureWriter::new(fc.crs.clone());
        writer.push(
            feature.id.as_ref(),
            &feature.properties,
            feature.geometry.unwrap(),
        );
        let out = writer.to_value();

        assert_eq!(out["crs"], fc.crs.unwrap());
        let written = &out["features"][0];
        assert_eq!(written["id"], json!(7));
        assert_eq!(written["properties"], json!({ "name": "a" }));
        assert_eq!(written["geometry"]["type"], json!("MultiPolygon"));
        assert_eq!(
            written["geometry"]["coordinates"],
            json!([[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]])
        );
    }
}
