//! `disarea compare` — batch analysis across firmware variants.

use std::path::Path;

use anyhow::Result;
use disarea_core::{analyze_batch, AnalysisConfig};
use disarea_report::{render_summary, ViewFormat};

use crate::variants::VariantsManifest;

/// Analyze every variant in the manifest and print the comparison
/// summary. Per-variant failures are isolated and reported in the
/// summary rather than aborting the batch.
pub fn run(
    manifest_path: &Path,
    config: &AnalysisConfig,
    baseline: Option<&str>,
    format: ViewFormat,
) -> Result<()> {
    let manifest = VariantsManifest::load(manifest_path)?;
    let items = analyze_batch(&manifest.variants, config);

    for item in &items {
        if let Err(e) = &item.outcome {
            eprintln!("warning: {}: {e}", item.spec.name);
        }
    }

    let baseline = baseline.or(manifest.baseline.as_deref());
    let output = render_summary(&items, baseline)?;
    println!("{}", output.render(format));
    Ok(())
}
