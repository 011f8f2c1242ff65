pub mod angle;

/// 3D point type. Planar coordinates carry `z = 0`.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
