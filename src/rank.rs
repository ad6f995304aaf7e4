//! Ranking of frequency tables.
//!
//! Turns an unordered [`FrequencyTable`] into a [`Ranking`] sorted by
//! count. Equal counts are left in whatever order the sort produces unless
//! a [`TieBreak::Colour`] is requested.

use std::cmp::Ordering;
use std::slice;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::{FrequencyTable, RankedEntry};

/// Direction of the count ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Least frequent first.
    #[default]
    Ascending,
    /// Most frequent first.
    Descending,
}

impl SortOrder {
    /// Map a "reverse" flag onto a direction.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// How entries with equal counts are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// No guarantee; may differ between runs.
    #[default]
    Unspecified,
    /// By colour value, in the same direction as the counts.
    Colour,
}

/// Sorts a table into a [`Ranking`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    order: SortOrder,
    tie_break: TieBreak,
    limit: Option<usize>,
}

impl Ranker {
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Keep only the first `limit` entries after sorting.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn rank(&self, table: &FrequencyTable) -> Ranking {
        self.rank_entries(table.entries())
    }

    fn rank_entries(&self, mut entries: Vec<RankedEntry>) -> Ranking {
        let order = self.order;
        match self.tie_break {
            TieBreak::Unspecified => {
                entries.sort_unstable_by(|a, b| order.apply(a.count.cmp(&b.count)));
            }
            TieBreak::Colour => {
                entries.sort_unstable_by(|a, b| {
                    order.apply(a.count.cmp(&b.count).then(a.colour.cmp(&b.colour)))
                });
            }
        }

        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        Ranking {
            entries,
            order: self.order,
        }
    }
}

/// Rank every entry of `table` by count.
pub fn rank(table: &FrequencyTable, order: SortOrder) -> Ranking {
    Ranker::new(order).rank(table)
}

/// Rank `table` and keep the first `n` entries. `n >= table.len()` keeps all.
pub fn top_n(table: &FrequencyTable, order: SortOrder, n: usize) -> Ranking {
    Ranker::new(order).limit(Some(n)).rank(table)
}

/// Entries sorted by count.
///
/// Iterating borrows the ranking, so it can be walked any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
    order: SortOrder,
}

impl Ranking {
    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&RankedEntry> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<RankedEntry> {
        self.entries
    }

    /// Sum of the counts kept in this ranking.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Sort the same entries again with `ranker`.
    pub fn rerank(self, ranker: &Ranker) -> Ranking {
        ranker.rank_entries(self.entries)
    }

    /// Reverse the sequence, flipping its direction.
    pub fn reverse(mut self) -> Ranking {
        self.entries.reverse();
        self.order = self.order.reversed();
        self
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedEntry;
    type IntoIter = slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Ranking {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
