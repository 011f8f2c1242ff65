mod outcome;
mod polygon_unspike;
mod ring_filter;

pub use outcome::{FeatureOutcome, SkipReason};
pub use polygon_unspike::Unspike;
pub use ring_filter::{RingFilter, RingFilterResult};
