use crate::error::{ConfigError, Result};
use crate::math::angle::CoincidentVertexPolicy;

/// Spike angle threshold in degrees, validated to lie in `(0, 180]`.
///
/// Vertices whose interior angle is strictly below this value are spikes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleThreshold(f64);

impl AngleThreshold {
    /// Validates a threshold.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ThresholdOutOfRange` if `degrees` is not a
    /// finite value in `(0, 180]`.
    pub fn new(degrees: f64) -> Result<Self> {
        if degrees.is_finite() && degrees > 0.0 && degrees <= 180.0 {
            Ok(Self(degrees))
        } else {
            Err(ConfigError::ThresholdOutOfRange(degrees).into())
        }
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0
    }
}

/// What happens when filtering would leave a ring with fewer than three
/// vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRingPolicy {
    /// Leave the ring unfiltered.
    #[default]
    KeepOriginal,
    /// Skip the whole polygon.
    InvalidatePolygon,
}

/// Settings consumed by the spike filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnspikeConfig {
    pub threshold: AngleThreshold,
    pub coincident: CoincidentVertexPolicy,
    pub degenerate_ring: DegenerateRingPolicy,
}

impl UnspikeConfig {
    /// Creates a configuration with default policies.
    #[must_use]
    pub fn new(threshold: AngleThreshold) -> Self {
        Self {
            threshold,
            coincident: CoincidentVertexPolicy::default(),
            degenerate_ring: DegenerateRingPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_coincident(mut self, policy: CoincidentVertexPolicy) -> Self {
        self.coincident = policy;
        self
    }

    #[must_use]
    pub fn with_degenerate_ring(mut self, policy: DegenerateRingPolicy) -> Self {
        self.degenerate_ring = policy;
        self
    }
}
