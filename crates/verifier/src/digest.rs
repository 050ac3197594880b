//! Native stand-in for a zkVM verifier.
//!
//! A "proof" is just the hash of the program id and the public inputs, so
//! proofs are trivially forgeable.  Useful for tests and local replays where
//! the real proving stack isn't available.

use bastion_primitives::{buf::Buf32, hash};

use crate::{
    errors::{VerifierError, VerifierResult},
    verifier::ProofVerifier,
};

#[derive(Clone, Debug)]
pub struct DigestVerifier {
    program_id: Buf32,
}

impl DigestVerifier {
    pub fn new(program_id: Buf32) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Buf32 {
        &self.program_id
    }

    /// Produces the proof this verifier accepts for the given program and
    /// public inputs.
    pub fn prove(program_id: &Buf32, public_inputs: &[u8]) -> Vec<u8> {
        compute_digest(program_id, public_inputs).as_slice().to_vec()
    }
}

fn compute_digest(program_id: &Buf32, public_inputs: &[u8]) -> Buf32 {
    hash::concat([program_id.as_slice(), public_inputs])
}

impl ProofVerifier for DigestVerifier {
    fn check(&self, program_id: &Buf32, public_inputs: &[u8], proof: &[u8]) -> VerifierResult<()> {
        if *program_id != self.program_id {
            return Err(VerifierError::ProgramMismatch {
                expected: self.program_id,
                got: *program_id,
            });
        }

        if proof.len() != Buf32::LEN {
            return Err(VerifierError::MalformedProof(format!(
                "expected {} bytes, got {}",
                Buf32::LEN,
                proof.len()
            )));
        }

        let expected = compute_digest(program_id, public_inputs);
        if expected.as_slice() != proof {
            return Err(VerifierError::InvalidProof(
                "digest does not match public inputs".to_string(),
            ));
        }

        Ok(())
    }
}
