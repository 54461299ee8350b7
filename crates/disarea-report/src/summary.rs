//! Cross-variant comparison summary.
//!
//! Renders a batch of variant runs into one table plus scaling factors
//! against a baseline variant and per-module efficiency figures for the
//! redundant configurations. Failed variants are listed, never dropped
//! silently, and never abort rendering of the successful ones.

use disarea_core::{AreaEstimate, BatchItem};
use serde_json::json;

use crate::error::{ReportError, Result};
use crate::format::{format_area, group_thousands};
use crate::view::ViewOutput;

/// One successful row of the summary.
struct Row<'a> {
    name: &'a str,
    module_count: u32,
    result: &'a AreaEstimate,
}

/// Render the comparison summary for a batch.
///
/// `baseline` names the variant that scaling factors are computed
/// against; when `None`, the first successful variant is used.
pub fn render_summary(items: &[BatchItem], baseline: Option<&str>) -> Result<ViewOutput> {
    let rows: Vec<Row<'_>> = items
        .iter()
        .filter_map(|item| {
            item.outcome.as_ref().ok().map(|result| Row {
                name: item.spec.name.as_str(),
                module_count: item.spec.module_count,
                result,
            })
        })
        .collect();
    let failures: Vec<(&str, String)> = items
        .iter()
        .filter_map(|item| {
            item.outcome
                .as_ref()
                .err()
                .map(|e| (item.spec.name.as_str(), e.to_string()))
        })
        .collect();

    if rows.is_empty() && failures.is_empty() {
        return Err(ReportError::EmptyBatch);
    }

    let baseline_row = match baseline {
        Some(name) => Some(
            rows.iter()
                .find(|row| row.name == name)
                .ok_or_else(|| ReportError::UnknownBaseline {
                    name: name.to_string(),
                })?,
        ),
        None => rows.first(),
    };

    let mut text = String::new();
    text.push_str("=== Variant Comparison ===\n\n");

    text.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>8}\n",
        "Variant", "Instr", "Gates", "Area", "Ref Area", "Ratio"
    ));
    text.push_str(&"-".repeat(74));
    text.push('\n');
    for row in &rows {
        let (ref_area, ratio) = match row.result.reference {
            Some(ref cmp) => (
                format!("{:.4}", cmp.reference_area),
                format!("{:.2}x", cmp.ratio),
            ),
            None => ("--".into(), "--".into()),
        };
        text.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>12.4} {:>12} {:>8}\n",
            row.name,
            group_thousands(row.result.total_instructions()),
            group_thousands(row.result.total_gates),
            row.result.area_estimate,
            ref_area,
            ratio,
        ));
    }

    if let Some(base) = baseline_row {
        let scaled: Vec<&Row<'_>> = rows.iter().filter(|row| row.name != base.name).collect();
        if !scaled.is_empty() && base.result.total_instructions() > 0 {
            text.push_str(&format!("\nScaling vs {}:\n", base.name));
            for row in scaled {
                text.push_str(&format!(
                    "  {:<10} instructions {:.2}x, gates {:.2}x, area {:.2}x\n",
                    row.name,
                    row.result.total_instructions() as f64
                        / base.result.total_instructions() as f64,
                    row.result.total_gates as f64 / base.result.total_gates as f64,
                    row.result.area_estimate / base.result.area_estimate,
                ));
            }
        }
    }

    let redundant: Vec<&Row<'_>> = rows.iter().filter(|row| row.module_count > 1).collect();
    if !redundant.is_empty() {
        text.push_str("\nPer-module efficiency:\n");
        for row in &rows {
            let modules = row.module_count.max(1) as f64;
            text.push_str(&format!(
                "  {:<10} {} modules: {} / module, {:.0} gates / module\n",
                row.name,
                row.module_count,
                format_area(row.result.area_estimate / modules),
                row.result.total_gates as f64 / modules,
            ));
        }
    }

    if !failures.is_empty() {
        text.push_str("\nFailed listings:\n");
        for (name, message) in &failures {
            text.push_str(&format!("  ! {name}: {message}\n"));
        }
    }

    let json_rows: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "name": row.name,
                "module-count": row.module_count,
                "total-instructions": row.result.total_instructions(),
                "total-gates": row.result.total_gates,
                "area-estimate": row.result.area_estimate,
                "reference": row.result.reference.as_ref().map(|cmp| json!({
                    "reference-les": cmp.reference_les,
                    "reference-area": cmp.reference_area,
                    "ratio": cmp.ratio,
                    "percent-delta": cmp.percent_delta,
                })),
            })
        })
        .collect();
    let json_failures: Vec<_> = failures
        .iter()
        .map(|(name, message)| json!({"name": name, "error": message}))
        .collect();

    let data = json!({
        "view": "summary",
        "baseline": baseline_row.map(|row| row.name),
        "variants": json_rows,
        "failures": json_failures,
    });

    Ok(ViewOutput { text, data })
}
