//! Disassembly listing parser.
//!
//! Recognizes objdump-style instruction records of the shape
//! `<hex address>: <hex word> <mnemonic> …` and extracts the mnemonics in
//! file order. Everything else in a listing (section headers, symbol rows,
//! source interleaving, blank lines) is expected noise and skipped silently.

use std::sync::OnceLock;

use regex::Regex;

/// Matches an instruction record, possibly after leading whitespace.
/// Capture 1 is the address, capture 2 the mnemonic.
fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*([0-9a-f]+):\s+[0-9a-f]+\s+(\w+)").expect("pattern is well-formed")
    })
}

/// Extract the mnemonic from a single listing line, if it is an
/// instruction record. Matching is case-insensitive and the mnemonic is
/// normalized to lowercase.
pub fn parse_line(line: &str) -> Option<String> {
    record_pattern()
        .captures(line)
        .map(|caps| caps[2].to_lowercase())
}

/// Extract all mnemonics from listing text, in file order.
///
/// An empty result is a valid outcome, not an error; whether zero matches
/// constitutes a failure is the caller's call.
pub fn parse_listing(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_line).collect()
}
