//! `variants.toml` manifest parsing for batch comparisons.

use std::path::Path;

use anyhow::{Context, Result};
use disarea_core::VariantSpec;
use serde::Deserialize;

/// A batch manifest: the variants to analyze plus an optional default
/// baseline for scaling factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariantsManifest {
    /// Variant name the scaling section compares against. Overridable
    /// from the command line.
    #[serde(default)]
    pub baseline: Option<String>,
    /// The variants, analyzed in manifest order.
    pub variants: Vec<VariantSpec>,
}

impl VariantsManifest {
    /// Parse a manifest from a TOML string.
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let manifest: VariantsManifest =
            toml::from_str(toml_str).context("invalid variants manifest")?;
        Ok(manifest)
    }

    /// Load a manifest from a file, resolving relative listing paths
    /// against the manifest's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read variants manifest {}", path.display()))?;
        let mut manifest = Self::from_str(&content)?;
        if let Some(dir) = path.parent() {
            for spec in &mut manifest.variants {
                if spec.listing.is_relative() {
                    spec.listing = dir.join(&spec.listing);
                }
            }
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest = VariantsManifest::from_str(
            r#"
baseline = "single"

[[variants]]
name = "single"
listing = "single.dis"
reference-les = 6826

[[variants]]
name = "tmr"
listing = "tmr.dis"
module-count = 3
reference-les = 6886
"#,
        )
        .unwrap();
        assert_eq!(manifest.baseline.as_deref(), Some("single"));
        assert_eq!(manifest.variants.len(), 2);
        assert_eq!(manifest.variants[0].module_count, 1);
        assert_eq!(manifest.variants[1].module_count, 3);
    }

    #[test]
    fn baseline_is_optional() {
        let manifest = VariantsManifest::from_str(
            r#"
[[variants]]
name = "single"
listing = "single.dis"
"#,
        )
        .unwrap();
        assert!(manifest.baseline.is_none());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(VariantsManifest::from_str("variants = [[[").is_err());
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("variants.toml");
        std::fs::write(
            &manifest_path,
            "[[variants]]\nname = \"single\"\nlisting = \"single.dis\"\n",
        )
        .unwrap();

        let manifest = VariantsManifest::load(&manifest_path).unwrap();
        assert_eq!(manifest.variants[0].listing, dir.path().join("single.dis"));
    }
}
