//! disarea CLI — silicon-area estimation for RISC-V firmware variants.

mod commands;
mod variants;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use disarea_report::ViewFormat;

#[derive(Parser)]
#[command(name = "disarea", version, about = "Gate-count area estimation from disassembly")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one disassembly listing
    Analyze {
        /// Path to the disassembly listing
        listing: PathBuf,
        /// Analysis configuration (.area.toml); built-in RV32 baseline if omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Logic-element count of a reference FPGA build to compare against
        #[arg(long)]
        reference_les: Option<u64>,
        /// How many mnemonics get a detailed table row
        #[arg(long, default_value_t = 10)]
        top: usize,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Compare several firmware variants from a variants.toml manifest
    Compare {
        /// Path to the variants manifest
        #[arg(long)]
        variants: PathBuf,
        /// Analysis configuration (.area.toml); built-in RV32 baseline if omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Variant that scaling factors are computed against
        #[arg(long)]
        baseline: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Manage analysis configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Emit a starter .area.toml (stdout unless --out is given)
    Template {
        /// Write the template to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate an .area.toml configuration
    Validate {
        /// Path to the configuration file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze {
            listing,
            config,
            reference_les,
            top,
            format,
        } => {
            let config = commands::load_config(config.as_deref())?;
            let format = parse_format(format.as_deref())?;
            commands::analyze::run(&listing, &config, reference_les, top, format)
        }

        Commands::Compare {
            variants,
            config,
            baseline,
            format,
        } => {
            let config = commands::load_config(config.as_deref())?;
            let format = parse_format(format.as_deref())?;
            commands::compare::run(&variants, &config, baseline.as_deref(), format)
        }

        Commands::Config { action } => match action {
            ConfigAction::Template { out } => commands::config::template(out.as_deref()),
            ConfigAction::Validate { path } => commands::config::validate(&path),
        },
    }
}

fn parse_format(format: Option<&str>) -> anyhow::Result<ViewFormat> {
    match format {
        Some(name) => Ok(ViewFormat::parse(name)?),
        None => Ok(ViewFormat::Text),
    }
}
