use std::fmt;

use crate::operations::FeatureOutcome;

/// Per-run totals accumulated from feature outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub features_processed: usize,
    pub features_skipped: usize,
    pub total_spikes_removed: usize,
}

impl RunSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one feature outcome to the totals.
    pub fn record(&mut self, outcome: &FeatureOutcome) {
        self.features_processed += 1;
        if !outcome.kept {
            self.features_skipped += 1;
        }
        self.total_spikes_removed += outcome.spikes_removed;
    }

    /// Features written to the output.
    #[must_use]
    pub fn features_kept(&self) -> usize {
        self.features_processed - self.features_skipped
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "features processed: {}, features skipped: {}, spikes removed: {}",
            self.features_processed, self.features_skipped, self.total_spikes_removed
        )
    }
}
