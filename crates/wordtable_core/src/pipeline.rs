//! Filter → sort → slice derivation of the visible rows.

use std::num::NonZeroUsize;

use crate::{Record, SortDirection, SortSpec};

/// Keeps records whose word contains `term`, ignoring case.
/// An empty term keeps everything in original order.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| needle.is_empty() || record.word.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `spec`. Records comparing equal keep their relative order
/// in both directions.
pub fn sort_records<'a>(records: Vec<&'a Record>, spec: &SortSpec) -> Vec<&'a Record> {
    let mut keyed: Vec<_> = records
        .into_iter()
        .map(|record| (record.sort_value(&spec.key), record))
        .collect();
    // `sort_by` is stable; reversing the comparison keeps ties in place.
    keyed.sort_by(|(a, _), (b, _)| match spec.direction {
        SortDirection::Ascending => a.cmp(b),
        SortDirection::Descending => b.cmp(a),
    });
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Half-open index range of one page in the sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start: usize,
    pub end: usize,
}

impl PageBounds {
    pub fn new(current_page: usize, page_size: NonZeroUsize) -> Self {
        let size = page_size.get();
        let start = current_page.saturating_sub(1).saturating_mul(size);
        Self {
            start,
            end: start.saturating_add(size),
        }
    }

    /// The slice of `items` this page covers, clipped to the available length.
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let start = self.start.min(items.len());
        let end = self.end.min(items.len());
        &items[start..end]
    }
}

/// "Showing `start` to `end` of `total`", all 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl Summary {
    /// `None` when there is nothing to summarize.
    ///
    /// The start figure is reported even when the page lies past the end of
    /// the data, matching what the table shows for an out-of-range page.
    pub fn new(total: usize, bounds: PageBounds) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            start: bounds.start + 1,
            end: bounds.end.min(total),
            total,
        })
    }
}

pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}
