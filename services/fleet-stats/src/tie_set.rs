//! Running maximum with tie-set
//!
//! Keeps every entry whose value equals the largest value seen so far. A
//! strictly greater value resets the set to the new entry; an equal value is
//! appended. The running maximum starts at zero, so a leading zero value is
//! immediately tied with it.

use serde::{Deserialize, Serialize};

/// What `TieSet::offer` did with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Value exceeded the running maximum; the set now holds only this entry.
    Reset,
    /// Value equalled the running maximum; the entry was appended.
    Tied,
    /// Value was below the running maximum; the set is unchanged.
    Below,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieSet<E> {
    running_max: u64,
    entries: Vec<E>,
}

impl<E> TieSet<E> {
    pub fn new() -> Self {
        Self {
            running_max: 0,
            entries: Vec::new(),
        }
    }

    /// Offer an entry keyed by `value`.
    pub fn offer(&mut self, value: u64, entry: E) -> Offer {
        if value > self.running_max {
            self.running_max = value;
            self.entries.clear();
            self.entries.push(entry);
            Offer::Reset
        } else if value == self.running_max {
            self.entries.push(entry);
            Offer::Tied
        } else {
            Offer::Below
        }
    }

    pub fn running_max(&self) -> u64 {
        self.running_max
    }

    /// Entries tied at the running maximum, in the order they were offered.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for TieSet<E> {
    fn default() -> Self {
        Self::new()
    }
}
