use thiserror::Error;

/// Top-level error type for the unspike crate.
#[derive(Debug, Error)]
pub enum UnspikeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while building or decoding a geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported geometry type: {0}")]
    UnsupportedType(String),

    #[error("ring is not closed: first and last coordinates differ")]
    RingNotClosed,

    #[error("ring has {0} coordinates, at least 4 are required")]
    RingTooShort(usize),

    #[error("coordinates mix 2D and 3D positions")]
    MixedDimension,

    #[error("multipolygon has no members")]
    EmptyMultiPolygon,

    #[error("malformed coordinates: {0}")]
    MalformedCoordinates(String),
}

/// Errors in user-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("angle threshold {0} is out of range (0, 180]")]
    ThresholdOutOfRange(f64),
}

/// Errors from the feature source and sink.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to access {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid feature collection: {0}")]
    Format(String),
}

/// Convenience type alias for results using [`UnspikeError`].
pub type Result<T> = std::result::Result<T, UnspikeError>;
