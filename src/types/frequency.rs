//! Frequency table and ranked entries.

use std::collections::HashMap;

use super::Colour;

/// Occurrence count per exact colour over one image.
///
/// Counts only ever grow by [`FrequencyTable::record`], so every stored
/// colour has a count of at least one. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Colour, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `colour`.
    pub fn record(&mut self, colour: Colour) {
        *self.counts.entry(colour).or_insert(0) += 1;
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `colour`, or `None` if it never occurred.
    pub fn get(&self, colour: &Colour) -> Option<u64> {
        self.counts.get(colour).copied()
    }

    /// Sum of all counts, i.e. the number of pixels tallied.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Colour, u64)> + '_ {
        self.counts.iter().map(|(colour, count)| (*colour, *count))
    }

    /// Unordered (colour, count) pairs, ready for ranking.
    pub fn entries(&self) -> Vec<RankedEntry> {
        self.iter()
            .map(|(colour, count)| RankedEntry::new(colour, count))
            .collect()
    }
}

impl FromIterator<Colour> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Colour>>(iter: I) -> Self {
        let mut table = Self::new();
        for colour in iter {
            table.record(colour);
        }
        table
    }
}

/// A colour and its count, once placed into ranked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    pub colour: Colour,
    pub count: u64,
}

impl RankedEntry {
    pub const fn new(colour: Colour, count: u64) -> Self {
        Self { colour, count }
    }
}
