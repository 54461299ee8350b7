//! TOML loading, serialization, and validation for analysis configuration.
//!
//! An analysis configuration is stored as an `.area.toml` file holding the
//! technology constants and the cost model. Configuration is validated
//! before any run starts, since a malformed model is a configuration bug
//! rather than a data problem.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};
use crate::model::{CostModel, TechnologyParameters};

/// A validation issue found in an analysis configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// The full configuration for an analysis run: technology constants plus
/// the cost model. Shared read-only across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalysisConfig {
    /// Gate density and LE conversion factor.
    pub technology: TechnologyParameters,
    /// Per-mnemonic gate weights.
    pub cost_model: CostModel,
}

impl AnalysisConfig {
    /// The configuration the original area studies used: the RV32I weight
    /// table against Cyclone IV 60 nm constants.
    pub fn rv32_cyclone_iv() -> Self {
        AnalysisConfig {
            technology: TechnologyParameters::cyclone_iv_60nm(),
            cost_model: CostModel::rv32_baseline(),
        }
    }

    /// Fail-fast invariant check, used by the pipeline before a run.
    pub fn validate(&self) -> Result<()> {
        self.cost_model.validate()?;
        self.technology.validate()
    }
}

/// Load a configuration from an `.area.toml` file.
pub fn load_config_toml(path: &Path) -> Result<AnalysisConfig> {
    if !path.exists() {
        return Err(EstimateError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_toml(&content)
}

/// Parse a configuration from a TOML string.
pub fn parse_config_toml(toml_str: &str) -> Result<AnalysisConfig> {
    let config: AnalysisConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Serialize a configuration to pretty TOML.
pub fn config_to_toml(config: &AnalysisConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}

/// Generate a starter `.area.toml`, seeded from the RV32 baseline.
pub fn generate_template() -> Result<String> {
    config_to_toml(&AnalysisConfig::rv32_cyclone_iv())
}

/// Validate a configuration for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
/// Unlike [`AnalysisConfig::validate`] this collects every issue instead
/// of stopping at the first.
pub fn validate_config(config: &AnalysisConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if !(config.technology.gates_per_area_unit > 0.0) {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "gates-per-area-unit must be positive (got {})",
                config.technology.gates_per_area_unit
            ),
        });
    }

    if !(config.technology.le_to_gate_factor > 0.0) {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "le-to-gate-factor must be positive (got {})",
                config.technology.le_to_gate_factor
            ),
        });
    }

    if config.cost_model.default_cost == 0 {
        issues.push(ValidationIssue {
            severity: "error",
            message: "cost model default-cost must be positive".into(),
        });
    }

    for (mnemonic, &cost) in &config.cost_model.costs {
        if cost == 0 {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("cost for '{mnemonic}' must be positive"),
            });
        }
        if mnemonic.chars().any(|c| c.is_uppercase()) {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "mnemonic '{mnemonic}' is not lowercase and will never match a parsed listing"
                ),
            });
        }
    }

    if config.cost_model.costs.is_empty() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "cost model has no per-mnemonic entries, every instruction \
                      will be priced at the default"
                .into(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_baseline() {
        let original = AnalysisConfig::rv32_cyclone_iv();
        let toml_str = config_to_toml(&original).unwrap();
        let parsed = parse_config_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
[technology]
gates-per-area-unit = 3000.0
le-to-gate-factor = 5.0

[cost-model]
default-cost = 80

[cost-model.costs]
add = 100
csrw = 200
"#;
        let config = parse_config_toml(toml_str).unwrap();
        assert_eq!(config.technology.gates_per_area_unit, 3000.0);
        assert_eq!(config.cost_model.cost_of("csrw"), 200);
        assert_eq!(config.cost_model.cost_of("unlisted"), 80);
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_config_toml("this is not valid toml [[[").is_err());
    }

    #[test]
    fn parse_missing_section_returns_error() {
        assert!(parse_config_toml("[technology]\ngates-per-area-unit = 3000.0\n").is_err());
    }

    #[test]
    fn template_parses_and_validates() {
        let toml_str = generate_template().unwrap();
        let config = parse_config_toml(&toml_str).unwrap();
        assert!(validate_config(&config).is_ok());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_collects_multiple_issues() {
        let mut config = AnalysisConfig::rv32_cyclone_iv();
        config.technology.gates_per_area_unit = 0.0;
        config.cost_model.default_cost = 0;
        let issues = validate_config(&config).unwrap_err();
        assert!(issues.len() >= 2);
        assert!(issues.iter().all(|i| i.severity == "error"));
    }

    #[test]
    fn validate_warns_on_uppercase_mnemonic() {
        let mut config = AnalysisConfig::rv32_cyclone_iv();
        config.cost_model.costs.insert("ADDI".into(), 80);
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.severity == "warning" && i.message.contains("ADDI")));
    }

    #[test]
    fn load_not_found() {
        let result = load_config_toml(Path::new("/nonexistent/model.area.toml"));
        assert!(matches!(
            result.unwrap_err(),
            EstimateError::NotFound { .. }
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rv32.area.toml");
        std::fs::write(&path, generate_template().unwrap()).unwrap();

        let config = load_config_toml(&path).unwrap();
        assert_eq!(config, AnalysisConfig::rv32_cyclone_iv());
    }
}
