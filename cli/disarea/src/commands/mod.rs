//! CLI command implementations.

pub mod analyze;
pub mod compare;
pub mod config;

use std::path::Path;

use anyhow::{Context, Result};
use disarea_core::{load_config_toml, AnalysisConfig};

/// Load the analysis configuration, falling back to the built-in RV32
/// baseline when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => load_config_toml(path)
            .with_context(|| format!("cannot load configuration {}", path.display())),
        None => Ok(AnalysisConfig::rv32_cyclone_iv()),
    }
}
