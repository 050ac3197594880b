use bastion_bridge::{DepositLedger, DepositLog, DepositSink};
use bastion_primitives::prelude::*;
use bastion_state::{
    commitment::BlockCommitment,
    events::ProposerEvent,
    settlement::SettlementState,
    state_op::{apply_write_batch, StateOp, WriteBatch},
};
use bastion_verifier::{ProofBundle, VerifierSet};
use tracing::*;

use crate::{
    access::{Bindings, InitParams},
    errors::{ProposerError, ProposerResult},
    params::ProposerParams,
};

/// The settlement state machine.
///
/// Owns the settlement state and, once initialized, the deposit ledger and
/// the verifier bindings.  Callers must serialize access, see
/// [`crate::SharedProposer`].
#[derive(Debug)]
pub struct OnChainProposer<L> {
    params: ProposerParams,

    /// Set by the one initialization call, `None` until then.
    bindings: Option<Bindings<L>>,

    state: SettlementState,

    /// Events emitted by successful calls, oldest first.  Only emptied by
    /// [`Self::take_events`], so long-running owners have to drain it.
    events: Vec<ProposerEvent>,
}

impl<L: DepositLedger> OnChainProposer<L> {
    /// Creates an uninitialized proposer.  Every commit and verify is
    /// rejected until [`Self::initialize`] succeeds.
    pub fn new(params: ProposerParams) -> Self {
        Self {
            params,
            bindings: None,
            state: SettlementState::new_empty(),
            events: Vec::new(),
        }
    }

    /// Binds the deposit ledger, the verifiers and the sequencer allowlist.
    /// Can only succeed once.
    pub fn initialize(&mut self, init: InitParams<L>) -> ProposerResult<()> {
        if self.bindings.is_some() {
            return Err(ProposerError::AlreadyInitialized);
        }

        let bindings = init.validate(&self.params.address)?;

        let bypassed = bindings.verifiers.bypassed();
        if !bypassed.is_empty() {
            warn!(
                ?bypassed,
                "proof verification disabled for some backends, development mode only"
            );
        }

        info!(
            bridge = %bindings.bridge_address,
            sequencers = %bindings.sequencers.len(),
            validium = %self.params.validium,
            "proposer initialized"
        );
        self.bindings = Some(bindings);
        Ok(())
    }

    /// Commits the metadata of the next rollup block.
    ///
    /// If the commitment claims deposits, its hash must match the ledger's
    /// hash over the same number of pending deposits.  A non-zero withdrawals
    /// root is published to the ledger under `height`.
    pub fn commit(
        &mut self,
        caller: &Address,
        height: u64,
        commitment: BlockCommitment,
    ) -> ProposerResult<()> {
        let bindings = authorized(&mut self.bindings, caller)?;
        check_commit_height(&self.state, height)?;

        let deposits = commitment.deposit_logs_hash();
        if !deposits.is_null() {
            let expected = bindings.ledger.pending_deposits_hash(deposits.count())?;
            if expected != *deposits {
                warn!(%height, %expected, claimed = %deposits, "deposit logs mismatch");
                return Err(ProposerError::DepositMismatch {
                    expected,
                    got: *deposits,
                });
            }
        }

        // Last fallible step, everything after this can't fail.
        if commitment.has_withdrawals() {
            bindings
                .ledger
                .publish_withdrawals(height, *commitment.withdrawals_root())?;
        }

        let mut batch = WriteBatch::new_empty();
        batch.push(StateOp::PutCommitment(height, commitment));
        batch.push(StateOp::SetLastCommitted(height));
        apply_write_batch(&mut self.state, batch);

        let new_state_root = *commitment.new_state_root();
        info!(%height, %new_state_root, deposits = %commitment.deposit_count(), "committed block");
        self.events.push(ProposerEvent::BlockCommitted {
            height,
            new_state_root,
        });

        Ok(())
    }

    /// Verifies the next committed block against every live proof backend.
    ///
    /// On success the deposits the block consumed are dropped from the ledger
    /// and the predecessor's commitment is pruned.
    pub fn verify(
        &mut self,
        caller: &Address,
        height: u64,
        proofs: &ProofBundle,
    ) -> ProposerResult<()> {
        // This check order matters.  Ordering goes first so that verifying an
        // already-pruned height reports as out of order, not as uncommitted.
        let expected = self.state.next_verify_height();
        if height != expected {
            return Err(ProposerError::OutOfOrderVerify {
                expected,
                got: height,
            });
        }

        let commitment = *self
            .state
            .commitment_at(height)
            .ok_or(ProposerError::UncommittedBlock(height))?;

        let bindings = authorized(&mut self.bindings, caller)?;

        bindings
            .verifiers
            .verify_all(height, proofs)
            .map_err(|rej| ProposerError::ProofRejected {
                backend: rej.backend,
                reason: rej.error,
            })?;

        // Last fallible step, everything after this can't fail.
        let deposit_count = commitment.deposit_count();
        if deposit_count > 0 {
            bindings.ledger.remove_pending_deposits(deposit_count)?;
        }

        let mut batch = WriteBatch::new_empty();
        batch.push(StateOp::SetLastVerified(height));
        if !self.params.retain_history && height > 1 {
            batch.push(StateOp::DelCommitment(height - 1));
        }
        apply_write_batch(&mut self.state, batch);

        info!(%height, deposits = %deposit_count, "verified block");
        self.events.push(ProposerEvent::BlockVerified { height });

        Ok(())
    }

    pub fn params(&self) -> &ProposerParams {
        &self.params
    }

    pub fn is_initialized(&self) -> bool {
        self.bindings.is_some()
    }

    pub fn is_validium(&self) -> bool {
        self.params.validium
    }

    pub fn is_authorized(&self, addr: &Address) -> bool {
        self.bindings.as_ref().is_some_and(|b| b.is_sequencer(addr))
    }

    pub fn bridge_address(&self) -> Option<&Address> {
        self.bindings.as_ref().map(|b| &b.bridge_address)
    }

    pub fn verifiers(&self) -> Option<&VerifierSet> {
        self.bindings.as_ref().map(|b| &b.verifiers)
    }

    pub fn ledger(&self) -> Option<&L> {
        self.bindings.as_ref().map(|b| &b.ledger)
    }

    pub fn state(&self) -> &SettlementState {
        &self.state
    }

    pub fn last_committed_block(&self) -> u64 {
        self.state.last_committed_block()
    }

    pub fn last_verified_block(&self) -> u64 {
        self.state.last_verified_block()
    }

    /// Gets the commitment at a height, `None` for heights that were never
    /// committed or have been pruned.
    pub fn commitment_at(&self, height: u64) -> Option<&BlockCommitment> {
        self.state.commitment_at(height)
    }

    /// Drains the events emitted so far.  The buffer is unbounded, callers
    /// are expected to drain it after each call or batch of calls.
    pub fn take_events(&mut self) -> Vec<ProposerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<L: DepositLedger + DepositSink> OnChainProposer<L> {
    /// Records a deposit that arrived on the base chain at the back of the
    /// pending queue.
    ///
    /// Entries already pending can't be touched from outside, so the prefix
    /// a commit was checked against is the one its verify removes.
    pub fn record_deposit(
        &mut self,
        recipient: Address,
        amount: u128,
    ) -> ProposerResult<DepositLog> {
        let bindings = self.bindings.as_mut().ok_or(ProposerError::Uninitialized)?;
        Ok(bindings.ledger.record_deposit(recipient, amount))
    }
}

/// Returns the bindings if the proposer is initialized and the caller is an
/// allowed sequencer.
fn authorized<'b, L>(
    bindings: &'b mut Option<Bindings<L>>,
    caller: &Address,
) -> ProposerResult<&'b mut Bindings<L>> {
    match bindings {
        Some(b) if b.is_sequencer(caller) => Ok(b),
        _ => Err(ProposerError::Unauthorized(*caller)),
    }
}

/// Checks `height` is the immediate successor of the last committed block and
/// doesn't already hold a commitment.
fn check_commit_height(state: &SettlementState, height: u64) -> ProposerResult<()> {
    let expected = state.next_commit_height();
    if height != expected {
        // Re-committing a height we still hold is reported as a duplicate,
        // anything else is a gap or a pruned height.
        if state.commitments().contains(height) {
            return Err(ProposerError::DuplicateCommit(height));
        }
        return Err(ProposerError::OutOfOrderCommit {
            expected,
            got: height,
        });
    }

    if state.commitments().contains(height) {
        return Err(ProposerError::DuplicateCommit(height));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use bastion_bridge::{BridgeError, BridgeResult, PendingDepositLedger};
    use bastion_verifier::{
        DigestVerifier, ProofBackend, ProofPayload, VerifierBinding, VerifierError,
    };

    use super::*;

    const SELF_ADDR: Address = Address::new([0xee; 20]);
    const BRIDGE_ADDR: Address = Address::new([0xbb; 20]);
    const SEQ: Address = Address::new([0x5e; 20]);
    const STRANGER: Address = Address::new([0x99; 20]);

    fn program(backend: ProofBackend) -> Buf32 {
        Buf32::new([backend.index() as u8 + 1; 32])
    }

    fn verifier_addr(backend: ProofBackend) -> Address {
        Address::new([0xa0 + backend.index() as u8; 20])
    }

    fn live(backend: ProofBackend) -> VerifierBinding {
        VerifierBinding::live(verifier_addr(backend), DigestVerifier::new(program(backend)))
    }

    fn init_params(verifiers: [VerifierBinding; 3]) -> InitParams<PendingDepositLedger> {
        init_with_ledger(verifiers, PendingDepositLedger::new())
    }

    fn init_with_ledger<L>(verifiers: [VerifierBinding; 3], ledger: L) -> InitParams<L> {
        InitParams {
            bridge_address: BRIDGE_ADDR,
            ledger,
            verifiers,
            sequencers: vec![SEQ],
        }
    }

    /// Ledger that lost its pending deposits after they were committed.
    #[derive(Debug)]
    struct ShortLedger(PendingDepositLedger);

    impl DepositLedger for ShortLedger {
        fn pending_deposits_hash(&self, count: u16) -> BridgeResult<DepositLogsHash> {
            self.0.pending_deposits_hash(count)
        }

        fn publish_withdrawals(&mut self, height: u64, root: Buf32) -> BridgeResult<()> {
            self.0.publish_withdrawals(height, root)
        }

        fn remove_pending_deposits(&mut self, count: u16) -> BridgeResult<()> {
            Err(BridgeError::InsufficientDeposits {
                requested: count,
                pending: 0,
            })
        }
    }

    fn all_live() -> [VerifierBinding; 3] {
        ProofBackend::ALL.map(live)
    }

    fn setup() -> OnChainProposer<PendingDepositLedger> {
        setup_with(ProposerParams::new(SELF_ADDR, false))
    }

    fn setup_with(params: ProposerParams) -> OnChainProposer<PendingDepositLedger> {
        let mut prop = OnChainProposer::new(params);
        prop.initialize(init_params(all_live())).unwrap();
        prop
    }

    fn block(tag: u8) -> BlockCommitment {
        BlockCommitment::new(
            Buf32::new([tag; 32]),
            Buf32::new([tag.wrapping_add(100); 32]),
            DepositLogsHash::zero(),
            Buf32::zero(),
        )
    }

    fn block_with_deposits(tag: u8, hash: DepositLogsHash) -> BlockCommitment {
        BlockCommitment::new(Buf32::new([tag; 32]), Buf32::zero(), hash, Buf32::zero())
    }

    fn proofs_for(height: u64) -> ProofBundle {
        let [risc0, sp1, pico] = ProofBackend::ALL.map(|backend| {
            let inputs = height.to_be_bytes().to_vec();
            let proof = DigestVerifier::prove(&program(backend), &inputs);
            ProofPayload::new(program(backend), inputs, proof)
        });
        ProofBundle::new(risc0, sp1, pico)
    }

    #[test]
    fn test_initialize_twice() {
        let mut prop = setup();
        let res = prop.initialize(init_params(all_live()));
        assert_eq!(res, Err(ProposerError::AlreadyInitialized));
        assert!(prop.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_bad_addresses() {
        let mut prop = OnChainProposer::new(ProposerParams::new(SELF_ADDR, false));

        let mut init = init_params(all_live());
        init.bridge_address = Address::zero();
        let res = prop.initialize(init);
        assert_eq!(
            res,
            Err(ProposerError::InvalidAddress("bridge", Address::zero()))
        );

        let mut init = init_params(all_live());
        init.bridge_address = SELF_ADDR;
        assert!(matches!(
            prop.initialize(init),
            Err(ProposerError::InvalidAddress("bridge", _))
        ));

        let mut verifiers = all_live();
        verifiers[2] = VerifierBinding::live(SELF_ADDR, DigestVerifier::new(Buf32::zero()));
        let res = prop.initialize(init_params(verifiers));
        assert_eq!(
            res,
            Err(ProposerError::InvalidAddress("pico verifier", SELF_ADDR))
        );

        let mut init = init_params(all_live());
        init.sequencers.push(Address::zero());
        assert!(matches!(
            prop.initialize(init),
            Err(ProposerError::InvalidAddress("sequencer", _))
        ));

        // Nothing was bound by any of the failed attempts.
        assert!(!prop.is_initialized());
        assert!(prop.bridge_address().is_none());
        assert!(!prop.is_authorized(&SEQ));

        prop.initialize(init_params(all_live())).unwrap();
        assert!(prop.is_authorized(&SEQ));
        assert_eq!(prop.bridge_address(), Some(&BRIDGE_ADDR));
    }

    #[test]
    fn test_uninitialized_rejects_calls() {
        let mut prop: OnChainProposer<PendingDepositLedger> =
            OnChainProposer::new(ProposerParams::new(SELF_ADDR, true));
        assert!(prop.is_validium());

        let res = prop.commit(&SEQ, 1, block(1));
        assert_eq!(res, Err(ProposerError::Unauthorized(SEQ)));

        let res = prop.verify(&SEQ, 1, &proofs_for(1));
        assert_eq!(res, Err(ProposerError::UncommittedBlock(1)));
    }

    #[test]
    fn test_commit_sequencing() {
        let mut prop = setup();

        let res = prop.commit(&STRANGER, 1, block(1));
        assert_eq!(res, Err(ProposerError::Unauthorized(STRANGER)));

        let res = prop.commit(&SEQ, 2, block(2));
        assert_eq!(
            res,
            Err(ProposerError::OutOfOrderCommit {
                expected: 1,
                got: 2
            })
        );

        for h in 1..=3 {
            prop.commit(&SEQ, h, block(h as u8)).unwrap();
            assert_eq!(prop.last_committed_block(), h);
        }

        let res = prop.commit(&SEQ, 5, block(5));
        assert!(matches!(res, Err(ProposerError::OutOfOrderCommit { .. })));
        let res = prop.commit(&SEQ, 0, block(0));
        assert!(matches!(res, Err(ProposerError::OutOfOrderCommit { .. })));
        assert_eq!(prop.last_committed_block(), 3);
    }

    #[test]
    fn test_recommit_pruned_height() {
        let mut prop = setup();
        for h in 1..=3 {
            prop.commit(&SEQ, h, block(h as u8)).unwrap();
            prop.verify(&SEQ, h, &proofs_for(h)).unwrap();
        }
        assert!(prop.commitment_at(1).is_none());

        // Height 1 is gone from the store, so it's a plain ordering error.
        let res = prop.commit(&SEQ, 1, block(1));
        assert_eq!(
            res,
            Err(ProposerError::OutOfOrderCommit {
                expected: 4,
                got: 1
            })
        );

        // Height 3 is still held.
        let res = prop.commit(&SEQ, 3, block(3));
        assert_eq!(res, Err(ProposerError::DuplicateCommit(3)));
        assert_eq!(prop.last_committed_block(), 3);
    }

    #[test]
    fn test_duplicate_commit_keeps_original() {
        let mut prop = setup();
        prop.commit(&SEQ, 1, block(1)).unwrap();

        let res = prop.commit(&SEQ, 1, block(42));
        assert_eq!(res, Err(ProposerError::DuplicateCommit(1)));
        assert_eq!(prop.commitment_at(1), Some(&block(1)));
        assert_eq!(prop.last_committed_block(), 1);
    }

    #[test]
    fn test_zero_state_root_is_still_committed() {
        let mut prop = setup();
        let zero = BlockCommitment::new(
            Buf32::zero(),
            Buf32::zero(),
            DepositLogsHash::zero(),
            Buf32::zero(),
        );
        prop.commit(&SEQ, 1, zero).unwrap();
        assert_eq!(prop.commitment_at(1), Some(&zero));
        prop.verify(&SEQ, 1, &proofs_for(1)).unwrap();
    }

    #[test]
    fn test_commit_checks_deposits() {
        let mut prop = setup();
        for i in 0..3 {
            prop.record_deposit(Address::new([i + 1; 20]), 10).unwrap();
        }

        let good = prop.ledger().unwrap().pending_deposits_hash(2).unwrap();
        let bad = DepositLogsHash::from_digest(Buf32::new([7; 32]), 2);

        let res = prop.commit(&SEQ, 1, block_with_deposits(1, bad));
        assert_eq!(
            res,
            Err(ProposerError::DepositMismatch {
                expected: good,
                got: bad
            })
        );
        assert_eq!(prop.last_committed_block(), 0);
        assert!(prop.commitment_at(1).is_none());

        // Claiming more deposits than are pending.
        let too_many = DepositLogsHash::from_digest(Buf32::new([7; 32]), 4);
        let res = prop.commit(&SEQ, 1, block_with_deposits(1, too_many));
        assert!(matches!(
            res,
            Err(ProposerError::Bridge(BridgeError::InsufficientDeposits { .. }))
        ));

        prop.commit(&SEQ, 1, block_with_deposits(1, good)).unwrap();
        assert_eq!(prop.commitment_at(1).unwrap().deposit_count(), 2);

        // Committing doesn't consume anything yet.
        assert_eq!(prop.ledger().unwrap().pending_len(), 3);
    }

    #[test]
    fn test_commit_publishes_withdrawals() {
        let mut prop = setup();
        let root = Buf32::new([0x77; 32]);
        let commitment =
            BlockCommitment::new(Buf32::new([1; 32]), Buf32::zero(), DepositLogsHash::zero(), root);

        prop.commit(&SEQ, 1, commitment).unwrap();
        assert_eq!(prop.ledger().unwrap().withdrawals_root(1), Some(&root));
        assert_eq!(prop.ledger().unwrap().withdrawals_root(2), None);
    }

    #[test]
    fn test_commit_withdrawal_failure_is_atomic() {
        let root = Buf32::new([0x77; 32]);
        let mut ledger = PendingDepositLedger::new();
        ledger.publish_withdrawals(1, root).unwrap();

        let mut prop = OnChainProposer::new(ProposerParams::new(SELF_ADDR, false));
        prop.initialize(init_with_ledger(all_live(), ledger)).unwrap();

        let commitment =
            BlockCommitment::new(Buf32::new([1; 32]), Buf32::zero(), DepositLogsHash::zero(), root);
        let res = prop.commit(&SEQ, 1, commitment);
        assert_eq!(
            res,
            Err(ProposerError::Bridge(BridgeError::WithdrawalsAlreadyPublished(1)))
        );
        assert_eq!(prop.last_committed_block(), 0);
        assert!(prop.take_events().is_empty());
    }

    #[test]
    fn test_verify_check_order() {
        let mut prop = setup();

        // Nothing committed yet.
        let res = prop.verify(&STRANGER, 1, &proofs_for(1));
        assert_eq!(res, Err(ProposerError::UncommittedBlock(1)));

        prop.commit(&SEQ, 1, block(1)).unwrap();
        prop.commit(&SEQ, 2, block(2)).unwrap();

        // Ordering is checked before authorization.
        let res = prop.verify(&STRANGER, 2, &proofs_for(2));
        assert_eq!(
            res,
            Err(ProposerError::OutOfOrderVerify {
                expected: 1,
                got: 2
            })
        );

        let res = prop.verify(&STRANGER, 1, &proofs_for(1));
        assert_eq!(res, Err(ProposerError::Unauthorized(STRANGER)));

        prop.verify(&SEQ, 1, &proofs_for(1)).unwrap();
        prop.verify(&SEQ, 2, &proofs_for(2)).unwrap();

        // Pruned height reports as out of order rather than uncommitted.
        let res = prop.verify(&SEQ, 1, &proofs_for(1));
        assert_eq!(
            res,
            Err(ProposerError::OutOfOrderVerify {
                expected: 3,
                got: 1
            })
        );
    }

    #[test]
    fn test_rejected_proof_changes_nothing() {
        let mut prop = setup();
        prop.record_deposit(Address::new([1; 20]), 10).unwrap();
        let hash = prop.ledger().unwrap().pending_deposits_hash(1).unwrap();
        prop.commit(&SEQ, 1, block_with_deposits(1, hash)).unwrap();
        prop.take_events();

        let mut proofs = proofs_for(1);
        *proofs.get_mut(ProofBackend::Pico) =
            ProofPayload::new(program(ProofBackend::Pico), vec![1], vec![0; 32]);

        let res = prop.verify(&SEQ, 1, &proofs);
        assert!(matches!(
            res,
            Err(ProposerError::ProofRejected {
                backend: ProofBackend::Pico,
                reason: VerifierError::InvalidProof(_)
            })
        ));
        assert_eq!(prop.last_verified_block(), 0);
        assert_eq!(prop.ledger().unwrap().pending_len(), 1);
        assert!(prop.take_events().is_empty());
    }

    #[test]
    fn test_verify_consumes_deposits_and_prunes() {
        let mut prop = setup();
        prop.commit(&SEQ, 1, block(1)).unwrap();
        prop.verify(&SEQ, 1, &proofs_for(1)).unwrap();
        assert!(prop.commitment_at(1).is_some());

        for i in 0..5 {
            prop.record_deposit(Address::new([i + 1; 20]), 10).unwrap();
        }
        let hash = prop.ledger().unwrap().pending_deposits_hash(3).unwrap();
        prop.commit(&SEQ, 2, block_with_deposits(2, hash)).unwrap();
        prop.verify(&SEQ, 2, &proofs_for(2)).unwrap();

        assert_eq!(prop.last_verified_block(), 2);
        assert_eq!(prop.ledger().unwrap().pending_len(), 2);
        assert!(prop.commitment_at(1).is_none());
        assert!(prop.commitment_at(2).is_some());

        assert_eq!(
            prop.take_events(),
            vec![
                ProposerEvent::BlockCommitted {
                    height: 1,
                    new_state_root: Buf32::new([1; 32])
                },
                ProposerEvent::BlockVerified { height: 1 },
                ProposerEvent::BlockCommitted {
                    height: 2,
                    new_state_root: Buf32::new([2; 32])
                },
                ProposerEvent::BlockVerified { height: 2 },
            ]
        );
    }

    #[test]
    fn test_verify_fails_if_ledger_short() {
        let mut inner = PendingDepositLedger::new();
        inner.deposit(Address::new([1; 20]), 10);
        inner.deposit(Address::new([2; 20]), 10);

        let mut prop = OnChainProposer::new(ProposerParams::new(SELF_ADDR, false));
        prop.initialize(init_with_ledger(all_live(), ShortLedger(inner)))
            .unwrap();

        let hash = prop.ledger().unwrap().pending_deposits_hash(2).unwrap();
        prop.commit(&SEQ, 1, block_with_deposits(1, hash)).unwrap();
        prop.take_events();

        let res = prop.verify(&SEQ, 1, &proofs_for(1));
        assert!(matches!(
            res,
            Err(ProposerError::Bridge(BridgeError::InsufficientDeposits { .. }))
        ));
        assert_eq!(prop.last_verified_block(), 0);
        assert_eq!(prop.ledger().unwrap().0.pending_len(), 2);
        assert!(prop.take_events().is_empty());
    }

    #[test]
    fn test_deposits_recorded_after_commit_stay_pending() {
        let mut prop = setup();
        for i in 0..3 {
            prop.record_deposit(Address::new([i + 1; 20]), 10).unwrap();
        }
        let hash = prop.ledger().unwrap().pending_deposits_hash(2).unwrap();
        prop.commit(&SEQ, 1, block_with_deposits(1, hash)).unwrap();

        // Deposits arriving between commit and verify land behind the
        // committed prefix.
        let late = prop.record_deposit(Address::new([9; 20]), 10).unwrap();
        assert_eq!(late.nonce(), 3);

        prop.verify(&SEQ, 1, &proofs_for(1)).unwrap();

        let ledger = prop.ledger().unwrap();
        assert_eq!(ledger.consumed_count(), 2);
        let remaining = ledger.pending().front_n(2).unwrap();
        assert_eq!(remaining[0].nonce(), 2);
        assert_eq!(remaining[1], late);
    }

    #[test]
    fn test_record_deposit_requires_init() {
        let mut prop: OnChainProposer<PendingDepositLedger> =
            OnChainProposer::new(ProposerParams::new(SELF_ADDR, false));
        let res = prop.record_deposit(Address::new([1; 20]), 10);
        assert_eq!(res, Err(ProposerError::Uninitialized));
    }

    #[test]
    fn test_retain_history() {
        let mut prop = setup_with(ProposerParams::new(SELF_ADDR, false).with_retain_history(true));
        for h in 1..=3 {
            prop.commit(&SEQ, h, block(h as u8)).unwrap();
            prop.verify(&SEQ, h, &proofs_for(h)).unwrap();
        }
        assert_eq!(prop.state().commitments().len(), 3);
        assert_eq!(prop.commitment_at(1), Some(&block(1)));
    }

    #[test]
    fn test_bypassed_backend_accepts_garbage() {
        let mut prop = OnChainProposer::new(ProposerParams::new(SELF_ADDR, false));
        let [risc0, _, pico] = all_live();
        prop.initialize(init_params([risc0, VerifierBinding::Bypassed, pico]))
            .unwrap();

        prop.commit(&SEQ, 1, block(1)).unwrap();
        let mut proofs = proofs_for(1);
        *proofs.get_mut(ProofBackend::Sp1) =
            ProofPayload::new(Buf32::zero(), b"garbage".to_vec(), b"garbage".to_vec());
        prop.verify(&SEQ, 1, &proofs).unwrap();
        assert_eq!(prop.last_verified_block(), 1);
    }
}
