//! One-shot analysis runs and variant batches.
//!
//! Each run is a pure pipeline: decode, parse, tally, aggregate, compare.
//! Runs share only the read-only configuration, so variants can be
//! analyzed independently; a batch isolates failures per listing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::AnalysisConfig;
use crate::decode::{decode_listing, Encoding};
use crate::error::{EstimateError, Result};
use crate::estimate::{against_reference, estimate, AreaEstimate};
use crate::listing::parse_listing;
use crate::tally::InstructionTally;

/// One firmware variant to analyze: a listing path plus the redundancy
/// and reference figures that go with it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariantSpec {
    /// Variant name, e.g. "single", "tmr", "qmr".
    pub name: String,
    /// Path to the disassembly listing.
    pub listing: PathBuf,
    /// Number of redundant processing modules (1 for a single ALU,
    /// 3 for TMR, 5 for QMR). Used for per-module efficiency figures.
    #[serde(default = "default_module_count")]
    pub module_count: u32,
    /// Logic-element count of the reference FPGA build, if one exists.
    #[serde(default)]
    pub reference_les: Option<u64>,
}

fn default_module_count() -> u32 {
    1
}

/// The outcome of one variant within a batch. Failures stay attached to
/// the variant they belong to instead of aborting the batch.
#[derive(Debug)]
pub struct BatchItem {
    /// The variant that was analyzed.
    pub spec: VariantSpec,
    /// The run result; an error here is isolated to this listing.
    pub outcome: Result<AreaEstimate>,
}

/// Read a listing file and decode it with the encoding fallback chain.
///
/// Returns the text together with the encoding that accepted it.
pub fn read_listing(path: &Path) -> Result<(String, Encoding)> {
    if !path.exists() {
        return Err(EstimateError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    decode_listing(&bytes).ok_or_else(|| EstimateError::Decode {
        path: path.to_path_buf(),
    })
}

/// Analyze already-decoded listing text.
///
/// When `reference_les` is zero the derived reference area is zero and
/// the comparison is undefined; the run still succeeds with
/// `reference: None` so callers can surface it as a warning.
pub fn analyze_text(
    text: &str,
    config: &AnalysisConfig,
    reference_les: Option<u64>,
) -> Result<AreaEstimate> {
    config.validate()?;

    let tally = InstructionTally::from_mnemonics(parse_listing(text));
    let mut result = estimate(&tally, &config.cost_model, &config.technology)?;

    if let Some(les) = reference_les {
        match against_reference(result.area_estimate, les, &config.technology) {
            Ok(comparison) => result.reference = Some(comparison),
            Err(EstimateError::ZeroReferenceArea) => result.reference = None,
            Err(other) => return Err(other),
        }
    }
    Ok(result)
}

/// Analyze a listing file: read, decode, then run the text pipeline.
pub fn analyze_file(
    path: &Path,
    config: &AnalysisConfig,
    reference_les: Option<u64>,
) -> Result<AreaEstimate> {
    let (text, _) = read_listing(path)?;
    analyze_text(&text, config, reference_les)
}

/// Analyze several variants against one shared configuration.
///
/// Each variant's failure is isolated: one unreadable listing never
/// aborts the rest of the batch.
pub fn analyze_batch(variants: &[VariantSpec], config: &AnalysisConfig) -> Vec<BatchItem> {
    variants
        .iter()
        .map(|spec| BatchItem {
            spec: spec.clone(),
            outcome: analyze_file(&spec.listing, config, spec.reference_les),
        })
        .collect()
}
