use std::sync::Arc;

use bastion_primitives::buf::Address;
use tracing::*;

use crate::{
    backend::ProofBackend, errors::VerifierError, proof::ProofBundle, verifier::ProofVerifier,
};

/// How a backend is wired into the proposer.
#[derive(Clone, Debug)]
pub enum VerifierBinding {
    /// Proofs are checked by the verifier deployed at `address`.
    Live {
        address: Address,
        verifier: Arc<dyn ProofVerifier>,
    },

    /// Proof checking for this backend is skipped entirely.  Development
    /// mode only, never bind a live deployment like this.
    Bypassed,
}

impl VerifierBinding {
    pub fn live(address: Address, verifier: impl ProofVerifier + 'static) -> Self {
        Self::Live {
            address,
            verifier: Arc::new(verifier),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    /// Address of the bound verifier, if the backend is live.
    pub fn address(&self) -> Option<&Address> {
        match self {
            Self::Live { address, .. } => Some(address),
            Self::Bypassed => None,
        }
    }
}

/// A backend refused a proof.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RejectedProof {
    pub backend: ProofBackend,
    pub error: VerifierError,
}

/// The ordered set of verifier bindings, one per [`ProofBackend`].
#[derive(Clone, Debug)]
pub struct VerifierSet {
    bindings: [VerifierBinding; 3],
}

impl VerifierSet {
    /// Creates a set from bindings given in [`ProofBackend::ALL`] order.
    pub fn new(bindings: [VerifierBinding; 3]) -> Self {
        Self { bindings }
    }

    /// Iterates over the bindings along with the backend each belongs to.
    pub fn iter(&self) -> impl Iterator<Item = (ProofBackend, &VerifierBinding)> {
        ProofBackend::ALL.into_iter().zip(self.bindings.iter())
    }

    /// Returns the backends that are bypassed.
    pub fn bypassed(&self) -> Vec<ProofBackend> {
        self.iter()
            .filter(|(_, b)| !b.is_enabled())
            .map(|(backend, _)| backend)
            .collect()
    }

    /// Checks the bundle against every live backend, in order, stopping at
    /// the first rejection.  All live backends must accept.
    pub fn verify_all(&self, height: u64, bundle: &ProofBundle) -> Result<(), RejectedProof> {
        for (backend, binding) in self.iter() {
            let VerifierBinding::Live { verifier, .. } = binding else {
                warn!(%height, %backend, "skipping proof check, backend bypassed");
                continue;
            };

            let payload = bundle.get(backend);
            verifier
                .check(payload.program_id(), payload.public_inputs(), payload.proof())
                .map_err(|error| {
                    warn!(%height, %backend, %error, "proof rejected");
                    RejectedProof { backend, error }
                })?;

            debug!(%height, %backend, "proof accepted");
        }

        Ok(())
    }
}
