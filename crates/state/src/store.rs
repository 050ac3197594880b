//! Height-indexed store of block commitments.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::commitment::BlockCommitment;

/// Mapping from block height to the commitment made for it.
///
/// Presence is explicit: a height has an entry iff it was committed and has
/// not been pruned since.  Entries are only written through a
/// [`crate::state_op::WriteBatch`].
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct CommitmentStore {
    entries: BTreeMap<u64, BlockCommitment>,
}

impl CommitmentStore {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Gets the commitment at a height, if there is one.
    pub fn get(&self, height: u64) -> Option<&BlockCommitment> {
        self.entries.get(&height)
    }

    pub fn contains(&self, height: u64) -> bool {
        self.entries.contains_key(&height)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, height: u64, commitment: BlockCommitment) -> bool {
        self.entries.insert(height, commitment).is_none()
    }

    pub(crate) fn remove(&mut self, height: u64) -> Option<BlockCommitment> {
        self.entries.remove(&height)
    }
}
