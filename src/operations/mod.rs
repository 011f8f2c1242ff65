pub mod unspike;

pub use unspike::{FeatureOutcome, RingFilter, RingFilterResult, SkipReason, Unspike};
