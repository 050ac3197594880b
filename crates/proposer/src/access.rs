//! One-time initialization and the sequencer allowlist.

use std::collections::BTreeSet;

use bastion_primitives::buf::Address;
use bastion_verifier::{ProofBackend, VerifierBinding, VerifierSet};

use crate::errors::{ProposerError, ProposerResult};

/// Everything bound to the proposer by its single initialization call.
#[derive(Clone, Debug)]
pub struct InitParams<L> {
    /// Address the deposit ledger is deployed at.
    pub bridge_address: Address,

    /// Handle to the deposit ledger.
    pub ledger: L,

    /// Verifier bindings in [`ProofBackend::ALL`] order.
    pub verifiers: [VerifierBinding; 3],

    /// Addresses allowed to commit and verify.
    pub sequencers: Vec<Address>,
}

/// Collaborators of an initialized proposer.
#[derive(Debug)]
pub(crate) struct Bindings<L> {
    pub(crate) bridge_address: Address,
    pub(crate) ledger: L,
    pub(crate) verifiers: VerifierSet,
    pub(crate) sequencers: BTreeSet<Address>,
}

impl<L> Bindings<L> {
    pub(crate) fn is_sequencer(&self, addr: &Address) -> bool {
        self.sequencers.contains(addr)
    }
}

impl<L> InitParams<L> {
    /// Checks every address before anything is bound, so a rejected
    /// initialization leaves nothing behind.
    pub(crate) fn validate(self, own_address: &Address) -> ProposerResult<Bindings<L>> {
        check_address("bridge", &self.bridge_address, own_address)?;

        for (backend, binding) in ProofBackend::ALL.iter().zip(self.verifiers.iter()) {
            if let Some(addr) = binding.address() {
                check_address(verifier_label(*backend), addr, own_address)?;
            }
        }

        for seq in &self.sequencers {
            if seq.is_zero() {
                return Err(ProposerError::InvalidAddress("sequencer", *seq));
            }
        }

        Ok(Bindings {
            bridge_address: self.bridge_address,
            ledger: self.ledger,
            verifiers: VerifierSet::new(self.verifiers),
            sequencers: self.sequencers.into_iter().collect(),
        })
    }
}

fn verifier_label(backend: ProofBackend) -> &'static str {
    match backend {
        ProofBackend::Risc0 => "risc0 verifier",
        ProofBackend::Sp1 => "sp1 verifier",
        ProofBackend::Pico => "pico verifier",
    }
}

fn check_address(label: &'static str, addr: &Address, own_address: &Address) -> ProposerResult<()> {
    if addr.is_zero() || addr == own_address {
        return Err(ProposerError::InvalidAddress(label, *addr));
    }
    Ok(())
}
