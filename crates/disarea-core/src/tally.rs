//! Mnemonic occurrence counting.

use std::collections::BTreeMap;

use serde::Serialize;

/// Occurrence counts for every mnemonic seen in one listing.
///
/// Built once per analysis run; recomputation produces a new tally.
/// Aggregation is commutative, so the order mnemonics arrive in never
/// changes the counts. First-seen positions are kept so that frequency
/// ties in [`top`](Self::top) rankings break deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructionTally {
    counts: BTreeMap<String, u64>,
    total: u64,
    #[serde(skip)]
    first_seen: BTreeMap<String, usize>,
}

impl InstructionTally {
    /// Aggregate a mnemonic sequence into a tally.
    pub fn from_mnemonics<I, S>(mnemonics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = InstructionTally::default();
        for (index, mnemonic) in mnemonics.into_iter().enumerate() {
            let mnemonic = mnemonic.as_ref();
            *tally.counts.entry(mnemonic.to_string()).or_insert(0) += 1;
            tally.first_seen.entry(mnemonic.to_string()).or_insert(index);
            tally.total += 1;
        }
        tally
    }

    /// Total number of recognized instructions. Always equals the sum of
    /// the per-mnemonic counts.
    pub fn total_instructions(&self) -> u64 {
        self.total
    }

    /// Occurrence count for one mnemonic (zero if never seen).
    pub fn count(&self, mnemonic: &str) -> u64 {
        self.counts.get(mnemonic).copied().unwrap_or(0)
    }

    /// Iterate over `(mnemonic, count)` pairs in mnemonic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(m, &c)| (m.as_str(), c))
    }

    /// Number of distinct mnemonics.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True when no instruction was recognized.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The `n` most frequent mnemonics, most frequent first. Frequency
    /// ties break by first appearance in the listing.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by_key(|&(m, c)| (std::cmp::Reverse(c), self.first_seen[m]));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total_agree() {
        let tally = InstructionTally::from_mnemonics(["addi", "csrw", "addi", "lw"]);
        assert_eq!(tally.total_instructions(), 4);
        assert_eq!(tally.count("addi"), 2);
        assert_eq!(tally.count("csrw"), 1);
        assert_eq!(tally.count("missing"), 0);
        let sum: u64 = tally.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, tally.total_instructions());
    }

    #[test]
    fn order_does_not_affect_counts() {
        let a = InstructionTally::from_mnemonics(["add", "lw", "add", "sw", "lw", "add"]);
        let b = InstructionTally::from_mnemonics(["lw", "add", "sw", "add", "add", "lw"]);
        assert_eq!(a.count("add"), b.count("add"));
        assert_eq!(a.count("lw"), b.count("lw"));
        assert_eq!(a.total_instructions(), b.total_instructions());
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn empty_sequence_is_valid() {
        let tally = InstructionTally::from_mnemonics(Vec::<String>::new());
        assert!(tally.is_empty());
        assert_eq!(tally.total_instructions(), 0);
        assert_eq!(tally.distinct(), 0);
        assert!(tally.top(10).is_empty());
    }

    #[test]
    fn top_ranks_by_frequency() {
        let tally =
            InstructionTally::from_mnemonics(["lw", "addi", "addi", "sw", "addi", "lw"]);
        let top = tally.top(2);
        assert_eq!(top, vec![("addi", 3), ("lw", 2)]);
    }

    #[test]
    fn top_breaks_ties_by_first_seen() {
        // "sw" and "lw" both occur twice; "sw" appeared first.
        let tally = InstructionTally::from_mnemonics(["sw", "lw", "sw", "lw", "addi"]);
        let top = tally.top(3);
        assert_eq!(top, vec![("sw", 2), ("lw", 2), ("addi", 1)]);
    }

    #[test]
    fn top_larger_than_distinct_returns_all() {
        let tally = InstructionTally::from_mnemonics(["add", "sub"]);
        assert_eq!(tally.top(10).len(), 2);
    }
}
