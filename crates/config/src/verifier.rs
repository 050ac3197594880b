use bastion_primitives::prelude::*;
use bastion_verifier::ProofBackend;
use serde::{Deserialize, Serialize};

/// How a single proof backend is configured.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VerifierConfig {
    /// Verifier deployed at `address`, checking proofs of `program_id`.
    Live { address: Address, program_id: Buf32 },

    /// Proofs for this backend are not checked.  Development only.
    Bypassed,
}

impl VerifierConfig {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VerifiersConfig {
    pub risc0: VerifierConfig,
    pub sp1: VerifierConfig,
    pub pico: VerifierConfig,
}

impl VerifiersConfig {
    pub fn get(&self, backend: ProofBackend) -> &VerifierConfig {
        match backend {
            ProofBackend::Risc0 => &self.risc0,
            ProofBackend::Sp1 => &self.sp1,
            ProofBackend::Pico => &self.pico,
        }
    }
}
