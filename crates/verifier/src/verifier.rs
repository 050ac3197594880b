use std::fmt;

use bastion_primitives::buf::Buf32;

use crate::errors::VerifierResult;

/// A proof-checking capability.
///
/// Implementations either accept the proof or return an error; there is no
/// "soft" failure.  A backend that can't reach a verdict must return an error.
pub trait ProofVerifier: fmt::Debug + Send + Sync {
    fn check(&self, program_id: &Buf32, public_inputs: &[u8], proof: &[u8]) -> VerifierResult<()>;
}

impl<T: ProofVerifier + ?Sized> ProofVerifier for Box<T> {
    fn check(&self, program_id: &Buf32, public_inputs: &[u8], proof: &[u8]) -> VerifierResult<()> {
        (**self).check(program_id, public_inputs, proof)
    }
}

impl<T: ProofVerifier + ?Sized> ProofVerifier for std::sync::Arc<T> {
    fn check(&self, program_id: &Buf32, public_inputs: &[u8], proof: &[u8]) -> VerifierResult<()> {
        (**self).check(program_id, public_inputs, proof)
    }
}
