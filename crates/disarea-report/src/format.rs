//! Shared formatting helpers for area reports.

/// Group a count with thousands separators: `14360` becomes `14,360`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an area value in the configured area unit.
pub fn format_area(value: f64) -> String {
    format!("{value:.4} mm\u{b2}")
}

/// Format a gate count with its unit.
pub fn format_gates(gates: u64) -> String {
    format!("{} gates", group_thousands(gates))
}

/// Render an ASCII bar of `value` against `reference`.
///
/// The bar fills in proportion to `value / reference` and saturates at
/// full width when the value exceeds the reference. A zero reference
/// renders an empty bar.
///
/// Example output: `[████████░░░░░░░░░░░░] 0.42x`
pub fn ratio_bar(value: f64, reference: f64, bar_width: usize) -> String {
    if reference <= 0.0 {
        let empty = "\u{2591}".repeat(bar_width);
        return format!("[{empty}] --");
    }

    let ratio = value / reference;
    let filled = ((ratio * bar_width as f64).round() as usize).min(bar_width);
    let filled_str = "\u{2588}".repeat(filled);
    let empty_str = "\u{2591}".repeat(bar_width - filled);

    format!("[{filled_str}{empty_str}] {ratio:.2}x")
}
