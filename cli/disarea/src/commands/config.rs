//! `disarea config` — configuration template generation and validation.

use std::path::Path;

use anyhow::{bail, Result};
use disarea_core::{generate_template, load_config_toml, validate_config};

/// Emit a starter `.area.toml`, to stdout or a file.
pub fn template(out: Option<&Path>) -> Result<()> {
    let toml_str = generate_template()?;
    match out {
        Some(path) => {
            std::fs::write(path, &toml_str)?;
            println!("wrote configuration template to {}", path.display());
        }
        None => print!("{toml_str}"),
    }
    Ok(())
}

/// Validate a configuration file, printing every issue found.
pub fn validate(path: &Path) -> Result<()> {
    let config = load_config_toml(path)?;
    match validate_config(&config) {
        Ok(()) => {
            println!("{}: configuration is valid", path.display());
            Ok(())
        }
        Err(issues) => {
            let mut errors = 0;
            for issue in &issues {
                println!("{}: {}", issue.severity, issue.message);
                if issue.severity == "error" {
                    errors += 1;
                }
            }
            if errors > 0 {
                bail!("{errors} error(s) in {}", path.display());
            }
            Ok(())
        }
    }
}
