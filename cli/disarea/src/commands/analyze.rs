//! `disarea analyze` — single-listing estimation.

use std::path::Path;

use anyhow::Result;
use disarea_core::{analyze_text, read_listing, AnalysisConfig};
use disarea_report::{render_estimate, ViewFormat};

/// Analyze one listing and print the estimate report.
pub fn run(
    listing: &Path,
    config: &AnalysisConfig,
    reference_les: Option<u64>,
    top: usize,
    format: ViewFormat,
) -> Result<()> {
    let (text, encoding) = read_listing(listing)?;
    eprintln!("note: decoded {} as {}", listing.display(), encoding.label());

    let result = analyze_text(&text, config, reference_les)?;

    if result.tally.is_empty() {
        eprintln!("warning: no instruction records recognized in {}", listing.display());
    }
    if matches!(reference_les, Some(0)) {
        eprintln!("warning: reference area is zero, comparison omitted");
    }

    let name = listing
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("listing");
    let output = render_estimate(name, &result, &config.cost_model, top);
    println!("{}", output.render(format));
    Ok(())
}
