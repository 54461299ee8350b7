//! Per-run estimate report: totals, top-N table, reference comparison.

use disarea_core::{AreaEstimate, CostModel};
use serde_json::json;

use crate::format::{format_area, format_gates, group_thousands, ratio_bar};
use crate::view::ViewOutput;

const BAR_WIDTH: usize = 20;

/// Render one analysis run.
///
/// The top `top_n` mnemonics get a detailed line each; the remainder is
/// lumped into a single row so the printed gates always add up to the
/// true total computed by the aggregator.
pub fn render_estimate(
    name: &str,
    result: &AreaEstimate,
    model: &CostModel,
    top_n: usize,
) -> ViewOutput {
    let mut text = String::new();
    text.push_str(&format!("=== Area Estimate: {name} ===\n\n"));

    text.push_str(&format!(
        "Instructions:     {} ({} distinct mnemonics)\n",
        group_thousands(result.total_instructions()),
        result.tally.distinct(),
    ));

    if result.tally.is_empty() {
        text.push_str("\nNo instruction records recognized in this listing.\n");
    }

    let top = result.tally.top(top_n);
    let mut top_gates: u64 = 0;
    let mut top_rows = Vec::new();
    if !top.is_empty() {
        text.push_str(&format!("\nTop {} instructions:\n", top.len()));
        for (rank, (mnemonic, count)) in top.iter().enumerate() {
            let cost = model.cost_of(mnemonic);
            let gates = count * cost;
            top_gates += gates;
            text.push_str(&format!(
                "  {:2}. {:8} : {:6}x \u{d7} {:4} gates = {:>10}\n",
                rank + 1,
                mnemonic,
                count,
                cost,
                format_gates(gates),
            ));
            top_rows.push(json!({
                "mnemonic": mnemonic,
                "count": count,
                "cost": cost,
                "gates": gates,
            }));
        }
        let remaining = result.tally.distinct() - top.len();
        if remaining > 0 {
            text.push_str(&format!(
                "      ({} more mnemonics: {})\n",
                remaining,
                format_gates(result.total_gates - top_gates),
            ));
        }
    }

    text.push('\n');
    text.push_str(&format!(
        "Gate count total: {}\n",
        format_gates(result.total_gates)
    ));
    text.push_str(&format!(
        "Area estimate:    {}\n",
        format_area(result.area_estimate)
    ));

    if let Some(ref cmp) = result.reference {
        text.push('\n');
        text.push_str(&format!(
            "Reference FPGA:   {} LEs = {}\n",
            group_thousands(cmp.reference_les),
            format_area(cmp.reference_area),
        ));
        text.push_str(&format!(
            "Estimate vs ref:  {}  ({:+.1}%)\n",
            ratio_bar(result.area_estimate, cmp.reference_area, BAR_WIDTH),
            cmp.percent_delta,
        ));
    }

    let tally_map: serde_json::Map<String, serde_json::Value> = result
        .tally
        .iter()
        .map(|(m, c)| (m.to_string(), json!(c)))
        .collect();

    let data = json!({
        "view": "estimate",
        "variant": name,
        "total-instructions": result.total_instructions(),
        "distinct-mnemonics": result.tally.distinct(),
        "tally": tally_map,
        "total-gates": result.total_gates,
        "area-estimate": result.area_estimate,
        "top": top_rows,
        "reference": result.reference.as_ref().map(|cmp| json!({
            "reference-les": cmp.reference_les,
            "reference-area": cmp.reference_area,
            "ratio": cmp.ratio,
            "percent-delta": cmp.percent_delta,
        })),
    });

    ViewOutput { text, data }
}
