#![allow(clippy::unwrap_used)]

use serde_json::{json, Value};

use unspike::pipeline::run;
use unspike::{AngleThreshold, UnspikeConfig};

fn feature(id: u64, geometry: &Value) -> Value {
    json!({ "type": "Feature", "id": id, "properties": { "parcel": id }, "geometry": geometry })
}

#[test]
fn run_filters_and_skips_features() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("parcels.geojson");
    let output = dir.path().join("parcels_unspiked.geojson");

    let spiked = json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [5.0, -20.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
    });
    let square = json!({
        "type": "MultiPolygon",
        "coordinates": [[[[20.0, 0.0], [30.0, 0.0], [30.0, 10.0], [20.0, 10.0], [20.0, 0.0]]]]
    });
    let line = json!({ "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] });
    let collection = json!({
        "type": "FeatureCollection",
        "crs": { "type": "name", "properties": { "name": "EPSG:25832" } },
        "features": [feature(1, &spiked), feature(2, &line), feature(3, &square)]
    });
    std::fs::write(&input, collection.to_string()).unwrap();

    let config = UnspikeConfig::new(AngleThreshold::new(45.0).unwrap());
    let summary = run(&input, &output, &config).unwrap();

    assert_eq!(summary.features_processed, 3);
    assert_eq!(summary.features_skipped, 1);
    assert_eq!(summary.total_spikes_removed, 1);

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["crs"]["properties"]["name"], json!("EPSG:25832"));
    let features = written["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["id"], json!(1));
    assert_eq!(features[1]["properties"], json!({ "parcel": 3 }));
    assert_eq!(features[0]["geometry"]["type"], json!("MultiPolygon"));
    assert_eq!(
        features[0]["geometry"]["coordinates"],
        json!([[[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]])
    );
}

#[test]
fn run_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = UnspikeConfig::new(AngleThreshold::new(30.0).unwrap());
    let result = run(
        &dir.path().join("missing.geojson"),
        &dir.path().join("out.geojson"),
        &config,
    );
    assert!(result.is_err());
}
