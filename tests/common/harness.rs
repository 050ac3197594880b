//! Utilities for driving a proposer through whole commit/verify flows.

use std::sync::Once;

use bastion_bridge::{DepositLedger, PendingDepositLedger};
use bastion_common::logging;
use bastion_primitives::prelude::*;
use bastion_proposer::{InitParams, OnChainProposer, ProposerParams, SharedProposer};
use bastion_state::commitment::BlockCommitment;
use bastion_test_utils::{bridge::ledger_with_deposits, state, verifier};
use bastion_verifier::{ProofBackend, ProofBundle, VerifierBinding};
use tracing::debug;

pub(crate) const PROPOSER: Address = Address::new([0x01; 20]);
pub(crate) const BRIDGE: Address = Address::new([0x02; 20]);
pub(crate) const SEQUENCER: Address = Address::new([0x03; 20]);
#[allow(dead_code)]
pub(crate) const OUTSIDER: Address = Address::new([0x04; 20]);

static LOGGING: Once = Once::new();

fn init_logging() {
    LOGGING.call_once(|| logging::init(logging::LoggerConfig::with_base_name("integration-tests")));
}

pub(crate) type Proposer = SharedProposer<PendingDepositLedger>;

/// Sets up an initialized proposer whose ledger holds `deposits` pending
/// deposits, with the given backends bypassed.
pub(crate) fn setup(deposits: usize, bypassed: &[ProofBackend]) -> Proposer {
    init_logging();

    let mut proposer = OnChainProposer::new(ProposerParams::new(PROPOSER, false));
    let verifiers: [VerifierBinding; 3] = verifier::bindings_bypassing(bypassed);
    proposer
        .initialize(InitParams {
            bridge_address: BRIDGE,
            ledger: ledger_with_deposits(deposits),
            verifiers,
            sequencers: vec![SEQUENCER],
        })
        .unwrap();

    debug!(%deposits, ?bypassed, "proposer set up");
    SharedProposer::new(proposer)
}

/// Builds the commitment for `height` claiming the next `count` pending
/// deposits, with the hash taken from the proposer's ledger.
pub(crate) fn commitment_claiming(proposer: &Proposer, height: u64, count: u16) -> BlockCommitment {
    let deposits = if count == 0 {
        DepositLogsHash::zero()
    } else {
        proposer
            .with_proposer(|p| p.ledger().unwrap().pending_deposits_hash(count))
            .unwrap()
    };
    state::commitment_with(height, deposits, Buf32::zero())
}

/// Proofs every live fixture verifier accepts for the commitment.
pub(crate) fn proofs_for(height: u64, commitment: &BlockCommitment) -> ProofBundle {
    verifier::valid_proofs(height, commitment.new_state_root())
}

pub(crate) fn pending_deposits(proposer: &Proposer) -> usize {
    proposer.with_proposer(|p| p.ledger().unwrap().pending_len())
}
