use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{commitment::BlockCommitment, store::CommitmentStore};

/// Persisted settlement frontier: what has been committed, what has been
/// proven, and the commitments still needed to do either.
///
/// Invariant: `last_verified_block <= last_committed_block`, both only move
/// forward one height at a time.
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
pub struct SettlementState {
    /// Height of the most recently committed block, 0 before the first commit.
    pub(crate) last_committed_block: u64,

    /// Height of the most recently verified block, 0 before the first verify.
    pub(crate) last_verified_block: u64,

    /// Commitments for every committed height that has not been pruned.
    pub(crate) commitments: CommitmentStore,
}

impl SettlementState {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn last_committed_block(&self) -> u64 {
        self.last_committed_block
    }

    pub fn last_verified_block(&self) -> u64 {
        self.last_verified_block
    }

    /// Height the next commit must target.
    pub fn next_commit_height(&self) -> u64 {
        self.last_committed_block + 1
    }

    /// Height the next verify must target.
    pub fn next_verify_height(&self) -> u64 {
        self.last_verified_block + 1
    }

    pub fn commitments(&self) -> &CommitmentStore {
        &self.commitments
    }

    pub fn commitment_at(&self, height: u64) -> Option<&BlockCommitment> {
        self.commitments.get(height)
    }

    /// Number of heights that are committed but still awaiting proofs.
    pub fn pending_verification(&self) -> u64 {
        self.last_committed_block - self.last_verified_block
    }
}
