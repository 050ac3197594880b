//! Low-level operations we can make to write to the settlement state.  A call
//! first validates everything it can, builds a [`WriteBatch`], and only then
//! applies it, so a failed call never leaves partial writes behind.

use borsh::{BorshDeserialize, BorshSerialize};
use tracing::*;

use crate::{commitment::BlockCommitment, settlement::SettlementState};

#[derive(Clone, Debug, Eq, PartialEq, BorshDeserialize, BorshSerialize)]
pub enum StateOp {
    /// Stores a new commitment at a height that doesn't have one.
    PutCommitment(u64, BlockCommitment),

    /// Advances the committed frontier to the given height.
    SetLastCommitted(u64),

    /// Advances the verified frontier to the given height.
    SetLastVerified(u64),

    /// Prunes the commitment at a height, if present.
    DelCommitment(u64),
}

/// Collection of writes we're making to the state.
#[derive(Clone, Debug, Default, Eq, PartialEq, BorshDeserialize, BorshSerialize)]
pub struct WriteBatch {
    ops: Vec<StateOp>,
}

impl WriteBatch {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: StateOp) {
        self.ops.push(op);
    }
}

/// Applies a write batch to the in-memory settlement state.
///
/// This must succeed, the batch is expected to have been built from checks
/// made against this same state.  Panics in debug builds if a write would
/// break the frontier invariants.
pub fn apply_write_batch(state: &mut SettlementState, batch: WriteBatch) {
    for op in batch.ops {
        match op {
            StateOp::PutCommitment(height, commitment) => {
                let fresh = state.commitments.insert(height, commitment);
                debug_assert!(fresh, "state_op: overwrote commitment at {height}");
            }

            StateOp::SetLastCommitted(height) => {
                debug_assert_eq!(height, state.last_committed_block + 1);
                state.last_committed_block = height;
            }

            StateOp::SetLastVerified(height) => {
                debug_assert_eq!(height, state.last_verified_block + 1);
                debug_assert!(height <= state.last_committed_block);
                state.last_verified_block = height;
            }

            StateOp::DelCommitment(height) => {
                if state.commitments.remove(height).is_some() {
                    trace!(%height, "pruned commitment");
                }
            }
        }
    }
}
