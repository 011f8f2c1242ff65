use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::UnspikeConfig;
use crate::error::Result;
use crate::io::{read_feature_collection, FeatureCollection, FeatureWriter};
use crate::operations::Unspike;
use crate::summary::RunSummary;

/// Progress is logged every this many features.
const PROGRESS_INTERVAL: usize = 100;

/// Output path used when none is given: `<stem>_unspiked.<ext>` beside the input.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_unspiked.{}", ext.to_string_lossy()),
        None => format!("{stem}_unspiked"),
    };
    input.with_file_name(name)
}

/// Processes every feature of `collection` in input order.
///
/// Kept features are appended to the returned writer; skipped ones are
/// logged and counted.
#[must_use]
pub fn process_collection(
    collection: FeatureCollection,
    config: &UnspikeConfig,
) -> (FeatureWriter, RunSummary) {
    let processor = Unspike::new(config);
    let mut writer = FeatureWriter::new(collection.crs);
    let mut summary = RunSummary::new();

    info!(features = collection.features.len(), "processing features");
    for (index, feature) in collection.features.into_iter().enumerate() {
        let outcome = processor.execute_feature(&feature.geometry);
        summary.record(&outcome);

        match (outcome.geometry, &outcome.skip_reason) {
            (Some(geometry), _) => {
                if outcome.spikes_removed > 0 {
                    debug!(feature = index, spikes = outcome.spikes_removed, "unspiked");
                }
                writer.push(feature.id.as_ref(), &feature.properties, geometry);
            }
            (None, Some(reason)) => warn!(feature = index, %reason, "skipped feature"),
            (None, None) => warn!(feature = index, "skipped feature"),
        }

        if summary.features_processed % PROGRESS_INTERVAL == 0 {
            info!("processed {} features", summary.features_processed);
        }
    }

    (writer, summary)
}

/// Reads `input`, removes spikes, and writes the kept features to `output`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written. Per-feature problems never fail the run.
pub fn run(input: &Path, output: &Path, config: &UnspikeConfig) -> Result<RunSummary> {
    info!(input = %input.display(), output = %output.display(), "starting");
    let collection = read_feature_collection(input)?;
    if let Some(crs) = &collection.crs {
        info!(%crs, "input crs");
    }

    let (writer, summary) = process_collection(collection, config);
    writer.finish(output)?;

    info!(
        processed = summary.features_processed,
        skipped = summary.features_skipped,
        written = summary.features_kept(),
        spikes_removed = summary.total_spikes_removed,
        "processing complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_keeps_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/parcels.geojson")),
            PathBuf::from("/data/parcels_unspiked.geojson")
        );
    }

    #[test]
    fn default_output_without_extension() {
        assert_eq!(
            default_output_path(Path::new("parcels")),
            PathBuf::from("parcels_unspiked")
        );
    }
}
