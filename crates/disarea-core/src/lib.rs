//! Silicon-area estimation for RISC-V firmware variants.
//!
//! Parses a disassembly listing, tallies instruction mnemonics, applies a
//! per-mnemonic gate-cost table, and derives an approximate area plus an
//! optional comparison against a reference FPGA build. The pipeline is
//! assembled from independent pure stages:
//!
//! - **Decoding:** best-effort text decoding over a fixed encoding chain
//! - **Parsing:** instruction-record recognition in listing text
//! - **Tallying:** commutative mnemonic occurrence counting
//! - **Estimation:** exact integer gate aggregation, one final division

pub mod config;
pub mod decode;
pub mod error;
pub mod estimate;
pub mod listing;
pub mod model;
pub mod pipeline;
pub mod tally;

pub use config::{
    config_to_toml, generate_template, load_config_toml, parse_config_toml, validate_config,
    AnalysisConfig,
};
pub use decode::{decode_listing, Encoding};
pub use error::{EstimateError, Result};
pub use estimate::{against_reference, estimate, AreaEstimate, ReferenceComparison};
pub use listing::parse_listing;
pub use model::{CostModel, TechnologyParameters};
pub use pipeline::{analyze_batch, analyze_file, analyze_text, read_listing, BatchItem, VariantSpec};
pub use tally::InstructionTally;
