pub mod geojson;

pub use geojson::{read_feature_collection, Feature, FeatureCollection, FeatureWriter};
