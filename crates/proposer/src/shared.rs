use std::sync::Arc;

use bastion_bridge::{DepositLedger, DepositLog, DepositSink};
use bastion_primitives::prelude::*;
use bastion_state::{commitment::BlockCommitment, events::ProposerEvent};
use bastion_verifier::ProofBundle;
use parking_lot::Mutex;

use crate::{access::InitParams, errors::ProposerResult, proposer::OnChainProposer};

/// Handle to a proposer shared between threads.
///
/// Every call takes the lock for its whole duration, so calls are applied
/// one at a time, and the ledger read during a commit can't change before
/// the commit is written.
#[derive(Debug)]
pub struct SharedProposer<L> {
    inner: Arc<Mutex<OnChainProposer<L>>>,
}

impl<L> Clone for SharedProposer<L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<L: DepositLedger> SharedProposer<L> {
    pub fn new(proposer: OnChainProposer<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(proposer)),
        }
    }

    pub fn initialize(&self, init: InitParams<L>) -> ProposerResult<()> {
        self.inner.lock().initialize(init)
    }

    pub fn commit(
        &self,
        caller: &Address,
        height: u64,
        commitment: BlockCommitment,
    ) -> ProposerResult<()> {
        self.inner.lock().commit(caller, height, commitment)
    }

    pub fn verify(
        &self,
        caller: &Address,
        height: u64,
        proofs: &ProofBundle,
    ) -> ProposerResult<()> {
        self.inner.lock().verify(caller, height, proofs)
    }

    pub fn last_committed_block(&self) -> u64 {
        self.inner.lock().last_committed_block()
    }

    pub fn last_verified_block(&self) -> u64 {
        self.inner.lock().last_verified_block()
    }

    pub fn commitment_at(&self, height: u64) -> Option<BlockCommitment> {
        self.inner.lock().commitment_at(height).copied()
    }

    /// Drains buffered events, see [`OnChainProposer::take_events`].
    pub fn take_events(&self) -> Vec<ProposerEvent> {
        self.inner.lock().take_events()
    }

    /// Runs `f` with the proposer locked.  Useful to read several things from
    /// one consistent view.
    pub fn with_proposer<R>(&self, f: impl FnOnce(&OnChainProposer<L>) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl<L: DepositLedger + DepositSink> SharedProposer<L> {
    pub fn record_deposit(
        &self,
        recipient: Address,
        amount: u128,
    ) -> ProposerResult<DepositLog> {
        self.inner.lock().record_deposit(recipient, amount)
    }
}
