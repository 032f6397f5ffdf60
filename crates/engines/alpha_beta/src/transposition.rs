//! Transposition table for one iterative-deepening step.
//!
//! Entries are keyed by (board fingerprint with the role's player on turn,
//! recursion depth). Each value is stored with the bound it represents, since
//! a node that failed high or low under pruning only knows one side of its
//! true value.

use rustc_hash::FxHashMap;

use crate::search::SearchValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value lies strictly inside the window it was searched with.
    Exact,
    /// Fail-high: the true value is at least `value`.
    Lower,
    /// Fail-low: the true value is at most `value`.
    Upper,
}

impl Bound {
    /// Classifies a result against the window the node was entered with.
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub value: i32,
    pub bound: Bound,
    /// Some line below this node was cut off by the depth limit.
    pub depth_limited: bool,
}

impl Entry {
    fn search_value(&self) -> SearchValue {
        SearchValue::from_parts(self.value, self.depth_limited)
    }
}

/// Outcome of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Miss,
    /// The stored value answers this node outright.
    Hit(SearchValue),
    /// A stored bound narrowed the window but the node still has to be searched.
    Narrowed { depth_limited: bool },
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<(u64, u32), Entry>,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all entries, keeping the allocation for the next iteration.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.stores = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn stores(&self) -> u64 {
        self.stores
    }

    pub fn get(&self, key: u64, depth: u32) -> Option<&Entry> {
        self.entries.get(&(key, depth))
    }

    /// Looks the node up and applies the standard bounded-reuse rules to the
    /// caller's window.
    pub fn probe(&mut self, key: u64, depth: u32, alpha: &mut i32, beta: &mut i32) -> Probe {
        let Some(entry) = self.entries.get(&(key, depth)).copied() else {
            return Probe::Miss;
        };

        match entry.bound {
            Bound::Exact => {
                self.hits += 1;
                return Probe::Hit(entry.search_value());
            }
            Bound::Lower => *alpha = (*alpha).max(entry.value),
            Bound::Upper => *beta = (*beta).min(entry.value),
        }

        if *alpha >= *beta {
            self.hits += 1;
            Probe::Hit(entry.search_value())
        } else {
            Probe::Narrowed {
                depth_limited: entry.depth_limited,
            }
        }
    }

    pub fn store(&mut self, key: u64, depth: u32, entry: Entry) {
        self.stores += 1;
        self.entries.insert((key, depth), entry);
    }
}

#[cfg(test)]
#[path = "transposition_tests.rs"]
mod transposition_tests;
