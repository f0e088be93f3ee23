//! Insertion-ordered collections used by the markup index.
//!
//! Iteration order is first-insertion order, which keeps findings and
//! summaries deterministic for a given document.

use std::collections::HashMap;

/// Set of strings that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    positions: HashMap<String, usize>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`; returns `false` if it was already present.
    pub fn insert(&mut self, value: String) -> bool {
        if self.positions.contains_key(&value) {
            return false;
        }
        self.positions.insert(value.clone(), self.items.len());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.positions.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Multiset of strings: distinct values in first-seen order with counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceCounter {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl OccurrenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `value`.
    pub fn add(&mut self, value: String) {
        match self.positions.get(&value) {
            Some(&index) => self.entries[index].1 += 1,
            None => {
                self.positions.insert(value.clone(), self.entries.len());
                self.entries.push((value, 1));
            }
        }
    }

    /// Number of occurrences of `value` (0 when absent).
    pub fn count(&self, value: &str) -> usize {
        self.positions
            .get(value)
            .map(|&index| self.entries[index].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.positions.contains_key(value)
    }

    /// Number of distinct values.
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct values with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }
}
