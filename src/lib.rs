pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod summary;
pub mod validity;

pub use config::{AngleThreshold, DegenerateRingPolicy, UnspikeConfig};
pub use error::{Result, UnspikeError};
pub use math::angle::CoincidentVertexPolicy;
pub use operations::{FeatureOutcome, RingFilter, SkipReason, Unspike};
pub use summary::RunSummary;
