use arbitrary::Arbitrary;
use bastion_primitives::{buf::Address, buf::Buf32, hash};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A deposit made on the base chain that the rollup has to credit.
#[derive(
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
pub struct DepositLog {
    /// Account credited on the rollup.
    recipient: Address,

    /// Amount deposited, in the base chain's smallest unit.
    amount: u128,

    /// Ledger-assigned sequence number.
    nonce: u64,
}

impl DepositLog {
    pub fn new(recipient: Address, amount: u128, nonce: u64) -> Self {
        Self {
            recipient,
            amount,
            nonce,
        }
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn amount(&self) -> u128 {
        self.amount
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Hash of the log as it enters the rolling hash.
    pub fn compute_hash(&self) -> Buf32 {
        hash::compute_borsh_hash(self)
    }
}
