use thiserror::Error;

use crate::geometry::Geometry;

/// Why a feature was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    #[error("invalid after filtering and not repairable")]
    InvalidAfterFilter,

    #[error("a ring would degenerate below three vertices")]
    DegenerateRing,

    #[error("every member polygon was skipped")]
    AllMembersSkipped,

    #[error("malformed geometry: {0}")]
    Malformed(String),
}

/// Result of processing one feature geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureOutcome {
    pub kept: bool,
    pub spikes_removed: usize,
    /// Present iff `kept`.
    pub geometry: Option<Geometry>,
    /// Present iff not `kept`.
    pub skip_reason: Option<SkipReason>,
}

impl FeatureOutcome {
    /// A feature written to the output.
    #[must_use]
    pub fn keep(geometry: Geometry, spikes_removed: usize) -> Self {
        Self {
            kept: true,
            spikes_removed,
            geometry: Some(geometry),
            skip_reason: None,
        }
    }

    /// A feature left out of the output.
    #[must_use]
    pub fn skip(reason: SkipReason, spikes_removed: usize) -> Self {
        Self {
            kept: false,
            spikes_removed,
            geometry: None,
            skip_reason: Some(reason),
        }
    }
}
