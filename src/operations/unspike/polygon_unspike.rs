use tracing::debug;

use super::outcome::{FeatureOutcome, SkipReason};
use super::ring_filter::RingFilter;
use crate::config::{DegenerateRingPolicy, UnspikeConfig};
use crate::error::{GeometryError, Result, UnspikeError};
use crate::geometry::{Geometry, MultiPolygon, Polygon};
use crate::validity::{PlanarValidator, Validator};

/// Removes spikes from polygonal geometries and classifies the result.
///
/// Each ring of a polygon is filtered independently with the same
/// threshold. The reassembled polygon is checked by the [`Validator`] and,
/// when invalid, repaired; a polygon that cannot be repaired is skipped.
/// Repair may split a polygon into several parts, in which case the kept
/// geometry is a multipolygon.
/// Multipolygon members are processed one by one and the survivors are
/// reassembled in input order.
#[derive(Debug, Clone)]
pub struct Unspike<V = PlanarValidator> {
    filter: RingFilter,
    degenerate_ring: DegenerateRingPolicy,
    validator: V,
}

impl Unspike<PlanarValidator> {
    /// Creates a processor using the planar validity rules.
    #[must_use]
    pub fn new(config: &UnspikeConfig) -> Self {
        Self::with_validator(config, PlanarValidator)
    }
}

impl<V: Validator> Unspike<V> {
    /// Creates a processor with a custom validity/repair capability.
    #[must_use]
    pub fn with_validator(config: &UnspikeConfig, validator: V) -> Self {
        Self {
            filter: RingFilter::from_config(config),
            degenerate_ring: config.degenerate_ring,
            validator,
        }
    }

    /// Processes a decoded feature geometry.
    ///
    /// Decoding failures become skipped outcomes, so one bad feature never
    /// stops a run.
    #[must_use]
    pub fn execute_feature(&self, geometry: &Result<Geometry>) -> FeatureOutcome {
        match geometry {
            Ok(geometry) => self.execute(geometry),
            Err(UnspikeError::Geometry(GeometryError::UnsupportedType(kind))) => {
                FeatureOutcome::skip(SkipReason::UnsupportedGeometryType(kind.clone()), 0)
            }
            Err(err) => FeatureOutcome::skip(SkipReason::Malformed(err.to_string()), 0),
        }
    }

    /// Processes a polygon or multipolygon.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> FeatureOutcome {
        match geometry {
            Geometry::Polygon(polygon) => self.process_polygon(polygon),
            Geometry::MultiPolygon(multi) => self.process_multi_polygon(multi),
        }
    }

    /// Filters every ring of `polygon` and validates the reassembled result.
    #[must_use]
    pub fn process_polygon(&self, polygon: &Polygon) -> FeatureOutcome {
        let exterior = self.filter.execute(polygon.exterior());
        let mut removed = exterior.removed;
        let mut guarded = exterior.guarded;

        let mut interiors = Vec::with_capacity(polygon.interiors().len());
        for hole in polygon.interiors() {
            let filtered = self.filter.execute(hole);
            removed += filtered.removed;
            guarded |= filtered.guarded;
            interiors.push(filtered.ring);
        }

        if guarded && self.degenerate_ring == DegenerateRingPolicy::InvalidatePolygon {
            return FeatureOutcome::skip(SkipReason::DegenerateRing, removed);
        }

        let candidate = Polygon::from_rings(exterior.ring, interiors);
        if self.validator.is_valid(&candidate) {
            return FeatureOutcome::keep(Geometry::Polygon(candidate), removed);
        }

        match self.validator.repair(&candidate) {
            Some(repaired) => {
                debug!(spikes_removed = removed, "repaired polygon after filtering");
                FeatureOutcome::keep(repaired, removed)
            }
            None => FeatureOutcome::skip(SkipReason::InvalidAfterFilter, removed),
        }
    }

    fn process_multi_polygon(&self, multi: &MultiPolygon) -> FeatureOutcome {
        let mut removed = 0;
        let mut survivors = Vec::with_capacity(multi.polygons().len());

        for (index, member) in multi.polygons().iter().enumerate() {
            let outcome = self.process_polygon(member);
            removed += outcome.spikes_removed;
            match outcome.geometry {
                Some(Geometry::Polygon(polygon)) => survivors.push(polygon),
                Some(Geometry::MultiPolygon(parts)) => {
                    survivors.extend(parts.polygons().iter().cloned());
                }
                None => {
                    if let Some(reason) = &outcome.skip_reason {
                        debug!(member = index, %reason, "dropped multipolygon member");
                    }
                }
            }
        }

        match MultiPolygon::new(survivors) {
            Ok(multi) => FeatureOutcome::keep(Geometry::MultiPolygon(multi), removed),
            Err(_) => FeatureOutcome::skip(SkipReason::AllMembersSkipped, removed),
        }
    }
}
