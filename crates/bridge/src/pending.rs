use std::collections::BTreeMap;

use bastion_primitives::{hash, prelude::*};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{
    errors::{BridgeError, BridgeResult},
    ledger::{DepositLedger, DepositSink},
    log::DepositLog,
    state_queue::StateQueue,
};

/// In-memory deposit ledger.
///
/// Deposits wait in a queue until a verified block consumes a prefix of it;
/// withdrawal roots are recorded once per block height.
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
pub struct PendingDepositLedger {
    pending: StateQueue<DepositLog>,
    withdrawal_roots: BTreeMap<u64, Buf32>,
}

impl PendingDepositLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new deposit at the back of the pending queue, returning its
    /// log.  The queue position is used as the nonce.
    pub fn deposit(&mut self, recipient: Address, amount: u128) -> DepositLog {
        let log = DepositLog::new(recipient, amount, self.pending.next_idx());
        self.pending.push_back(log.clone());
        debug!(nonce = %log.nonce(), %recipient, %amount, "queued deposit");
        log
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total number of deposits ever consumed from the front of the queue.
    pub fn consumed_count(&self) -> u64 {
        self.pending.base_idx()
    }

    pub fn pending(&self) -> &StateQueue<DepositLog> {
        &self.pending
    }

    /// Returns the withdrawals root published for a block, if any.
    pub fn withdrawals_root(&self, height: u64) -> Option<&Buf32> {
        self.withdrawal_roots.get(&height)
    }
}

/// Computes the rolling hash the proposer expects for a prefix of deposits.
pub fn compute_deposit_logs_hash(logs: &[DepositLog]) -> BridgeResult<DepositLogsHash> {
    let count = u16::try_from(logs.len()).map_err(|_| BridgeError::InsufficientDeposits {
        requested: u16::MAX,
        pending: logs.len(),
    })?;
    let hashes = logs.iter().map(DepositLog::compute_hash).collect::<Vec<_>>();
    let digest = hash::concat(hashes.iter().map(Buf32::as_slice));
    Ok(DepositLogsHash::from_digest(digest, count))
}

impl DepositLedger for PendingDepositLedger {
    fn pending_deposits_hash(&self, count: u16) -> BridgeResult<DepositLogsHash> {
        let logs =
            self.pending
                .front_n(count as usize)
                .ok_or(BridgeError::InsufficientDeposits {
                    requested: count,
                    pending: self.pending.len(),
                })?;
        compute_deposit_logs_hash(logs)
    }

    fn publish_withdrawals(&mut self, height: u64, root: Buf32) -> BridgeResult<()> {
        if root.is_zero() {
            return Err(BridgeError::ZeroWithdrawalsRoot(height));
        }

        if self.withdrawal_roots.contains_key(&height) {
            return Err(BridgeError::WithdrawalsAlreadyPublished(height));
        }

        self.withdrawal_roots.insert(height, root);
        debug!(%height, %root, "published withdrawals");
        Ok(())
    }

    fn remove_pending_deposits(&mut self, count: u16) -> BridgeResult<()> {
        let pending = self.pending.len();
        let removed = self
            .pending
            .pop_front_n_vec(count as usize)
            .ok_or(BridgeError::InsufficientDeposits {
                requested: count,
                pending,
            })?;
        debug!(removed = %removed.len(), remaining = %self.pending.len(), "consumed deposits");
        Ok(())
    }
}

impl DepositSink for PendingDepositLedger {
    fn record_deposit(&mut self, recipient: Address, amount: u128) -> DepositLog {
        self.deposit(recipient, amount)
    }
}
