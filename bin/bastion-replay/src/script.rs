use bastion_primitives::prelude::*;
use bastion_verifier::ProofBundle;
use serde::{Deserialize, Serialize};

/// A sequence of calls to play against the proposer, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// A deposit lands in the ledger.
    Deposit { recipient: Address, amount: u64 },

    /// A sequencer commits a block.
    Commit {
        caller: Address,
        height: u64,
        new_state_root: Buf32,

        #[serde(default)]
        state_diff_commitment: Buf32,

        /// Explicit deposit logs hash to claim.  Takes priority over
        /// `deposit_count`.
        #[serde(default)]
        deposit_logs_hash: Option<DepositLogsHash>,

        /// Claim this many pending deposits, with the hash taken from the
        /// ledger.
        #[serde(default)]
        deposit_count: Option<u16>,

        #[serde(default)]
        withdrawals_root: Buf32,
    },

    /// A sequencer verifies a block.  Without explicit proofs, proofs the
    /// configured verifiers accept are generated.
    Verify {
        caller: Address,
        height: u64,

        #[serde(default)]
        proofs: Option<ProofBundle>,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "deposit",
            Self::Commit { .. } => "commit",
            Self::Verify { .. } => "verify",
        }
    }
}
