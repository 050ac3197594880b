use bastion_primitives::buf::Buf32;
use serde::{Deserialize, Serialize};

use crate::backend::ProofBackend;

/// What a single backend needs to check one block: the program the proof was
/// made for, the public inputs it commits to, and the proof itself.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofPayload {
    program_id: Buf32,

    #[serde(with = "hex::serde")]
    public_inputs: Vec<u8>,

    #[serde(with = "hex::serde")]
    proof: Vec<u8>,
}

impl ProofPayload {
    pub fn new(program_id: Buf32, public_inputs: Vec<u8>, proof: Vec<u8>) -> Self {
        Self {
            program_id,
            public_inputs,
            proof,
        }
    }

    /// RISC0 receipts commit to the guest image id and the digest of the
    /// journal, and carry the seal as proof.
    pub fn risc0(image_id: Buf32, journal_digest: Buf32, seal: Vec<u8>) -> Self {
        Self::new(image_id, journal_digest.as_slice().to_vec(), seal)
    }

    /// SP1 proofs commit to the program verifying key and the raw public
    /// values.
    pub fn sp1(program_vkey: Buf32, public_values: Vec<u8>, proof_bytes: Vec<u8>) -> Self {
        Self::new(program_vkey, public_values, proof_bytes)
    }

    /// Pico proofs commit to the RISC-V verifying key and the raw public
    /// values.
    pub fn pico(riscv_vkey: Buf32, public_values: Vec<u8>, proof: Vec<u8>) -> Self {
        Self::new(riscv_vkey, public_values, proof)
    }

    pub fn program_id(&self) -> &Buf32 {
        &self.program_id
    }

    pub fn public_inputs(&self) -> &[u8] {
        &self.public_inputs
    }

    pub fn proof(&self) -> &[u8] {
        &self.proof
    }
}

/// One payload per backend, submitted together when verifying a block.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofBundle {
    pub risc0: ProofPayload,
    pub sp1: ProofPayload,
    pub pico: ProofPayload,
}

impl ProofBundle {
    pub fn new(risc0: ProofPayload, sp1: ProofPayload, pico: ProofPayload) -> Self {
        Self { risc0, sp1, pico }
    }

    pub fn get(&self, backend: ProofBackend) -> &ProofPayload {
        match backend {
            ProofBackend::Risc0 => &self.risc0,
            ProofBackend::Sp1 => &self.sp1,
            ProofBackend::Pico => &self.pico,
        }
    }

    pub fn get_mut(&mut self, backend: ProofBackend) -> &mut ProofPayload {
        match backend {
            ProofBackend::Risc0 => &mut self.risc0,
            ProofBackend::Sp1 => &mut self.sp1,
            ProofBackend::Pico => &mut self.pico,
        }
    }
}
