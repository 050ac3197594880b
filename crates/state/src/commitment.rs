use arbitrary::Arbitrary;
use bastion_primitives::prelude::*;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Metadata committed for a single rollup block height.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct BlockCommitment {
    /// State root of the rollup after this block.
    new_state_root: Buf32,

    /// Versioned hash binding this block to its published state diff.
    state_diff_commitment: Buf32,

    /// Rolling hash over the deposits this block processed, carrying their
    /// count in the low bits.
    deposit_logs_hash: DepositLogsHash,

    /// Merkle root of the withdrawals this block initiated, zero if none.
    withdrawals_root: Buf32,
}

impl BlockCommitment {
    pub fn new(
        new_state_root: Buf32,
        state_diff_commitment: Buf32,
        deposit_logs_hash: DepositLogsHash,
        withdrawals_root: Buf32,
    ) -> Self {
        Self {
            new_state_root,
            state_diff_commitment,
            deposit_logs_hash,
            withdrawals_root,
        }
    }

    pub fn new_state_root(&self) -> &Buf32 {
        &self.new_state_root
    }

    pub fn state_diff_commitment(&self) -> &Buf32 {
        &self.state_diff_commitment
    }

    pub fn deposit_logs_hash(&self) -> &DepositLogsHash {
        &self.deposit_logs_hash
    }

    pub fn withdrawals_root(&self) -> &Buf32 {
        &self.withdrawals_root
    }

    /// Number of pending deposits this block consumes once verified.
    pub fn deposit_count(&self) -> u16 {
        if self.deposit_logs_hash.is_null() {
            0
        } else {
            self.deposit_logs_hash.count()
        }
    }

    /// Returns if the block published a withdrawals root.
    pub fn has_withdrawals(&self) -> bool {
        !self.withdrawals_root.is_zero()
    }
}
