//! Gate-count aggregation and area derivation.

use serde::Serialize;

use crate::error::{EstimateError, Result};
use crate::model::{CostModel, TechnologyParameters};
use crate::tally::InstructionTally;

/// Ratio of a computed estimate against a reference design whose size is
/// given as an FPGA logic-element count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReferenceComparison {
    /// Logic-element count the comparison was made against.
    pub reference_les: u64,
    /// Reference area derived through the technology parameters.
    pub reference_area: f64,
    /// `area_estimate / reference_area`.
    pub ratio: f64,
    /// Signed percentage delta of the estimate against the reference.
    pub percent_delta: f64,
}

/// The immutable result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AreaEstimate {
    /// Exact sum over the tally of `count x cost`, in gates.
    pub total_gates: u64,
    /// `total_gates / gates_per_area_unit`, one division at the end.
    pub area_estimate: f64,
    /// The tally the estimate was derived from.
    pub tally: InstructionTally,
    /// Optional comparison against a reference FPGA design.
    pub reference: Option<ReferenceComparison>,
}

impl AreaEstimate {
    /// Total number of recognized instructions.
    pub fn total_instructions(&self) -> u64 {
        self.tally.total_instructions()
    }
}

/// Turn a tally into a gate count and area.
///
/// The gate sum is exact integer arithmetic, order-independent over the
/// tally; the only floating-point step is the final division by the gate
/// density. Configuration invariants are checked up front: a malformed
/// model or non-positive density is a configuration bug and fails before
/// any aggregation. An empty tally is not an error and yields zeros.
pub fn estimate(
    tally: &InstructionTally,
    model: &CostModel,
    tech: &TechnologyParameters,
) -> Result<AreaEstimate> {
    model.validate()?;
    tech.validate()?;

    let mut total_gates: u64 = 0;
    for (mnemonic, count) in tally.iter() {
        total_gates += count * model.cost_of(mnemonic);
    }
    let area_estimate = total_gates as f64 / tech.gates_per_area_unit;

    Ok(AreaEstimate {
        total_gates,
        area_estimate,
        tally: tally.clone(),
        reference: None,
    })
}

/// Compare an area figure against a reference design of `reference_les`
/// logic elements.
///
/// Fails with [`EstimateError::ZeroReferenceArea`] when the derived
/// reference area is zero; callers treat that as "comparison undefined"
/// and keep the rest of the run's result.
pub fn against_reference(
    area_estimate: f64,
    reference_les: u64,
    tech: &TechnologyParameters,
) -> Result<ReferenceComparison> {
    tech.validate()?;
    let reference_area = reference_les as f64 * tech.le_to_gate_factor / tech.gates_per_area_unit;
    if reference_area == 0.0 {
        return Err(EstimateError::ZeroReferenceArea);
    }
    Ok(ReferenceComparison {
        reference_les,
        reference_area,
        ratio: area_estimate / reference_area,
        percent_delta: (area_estimate - reference_area) / reference_area * 100.0,
    })
}
