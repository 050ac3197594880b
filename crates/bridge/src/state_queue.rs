//! Queue with monotonic absolute indexes, serializable with Borsh.
//!
//! Entries are pushed at the back and consumed from the front in batches.
//! Absolute positions keep counting across pops, so an entry's index doubles
//! as its sequence number.  This does *not* use `VecDeque` internally, as
//! it's designed around being easily serializable.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct StateQueue<T> {
    /// Absolute index of the front of the queue.
    base_idx: u64,

    /// The entries in the queue.
    entries: Vec<T>,
}

impl<T> Default for StateQueue<T> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<T> StateQueue<T> {
    /// Creates a new empty fresh queue.
    pub fn new_empty() -> Self {
        Self {
            base_idx: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the absolute position of the front of the queue, even if there
    /// is no element there.
    pub fn base_idx(&self) -> u64 {
        self.base_idx
    }

    /// Returns the absolute index of the next element to be written.
    pub fn next_idx(&self) -> u64 {
        self.base_idx + self.entries.len() as u64
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first `n` entries, only if there are at least that many.
    pub fn front_n(&self, n: usize) -> Option<&[T]> {
        self.entries.get(..n)
    }

    /// Pushes an entry to the back of the queue, returning its absolute
    /// position.
    pub fn push_back(&mut self, ent: T) -> u64 {
        let idx = self.next_idx();
        self.entries.push(ent);
        idx
    }

    /// Pops the front `n` elements from the queue, only if they can all be
    /// popped.
    ///
    /// Returns `None` and leaves the queue untouched if there are not enough
    /// elements.
    pub fn pop_front_n_vec(&mut self, n: usize) -> Option<Vec<T>> {
        if self.entries.len() < n {
            return None;
        }

        // Split the queue entries we want to keep into its own vec.
        let out = {
            let mut new_entries = self.entries.split_off(n);
            std::mem::swap(&mut self.entries, &mut new_entries);
            new_entries
        };

        self.base_idx += n as u64;
        Some(out)
    }
}
