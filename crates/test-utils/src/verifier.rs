use bastion_primitives::prelude::*;
use bastion_verifier::{
    DigestVerifier, ProofBackend, ProofBundle, ProofPayload, ProofVerifier, VerifierBinding,
    VerifierError, VerifierResult,
};

/// Verifier that refuses everything, standing in for a backend that is down
/// or misconfigured.
#[derive(Clone, Debug, Default)]
pub struct RejectingVerifier;

impl ProofVerifier for RejectingVerifier {
    fn check(
        &self,
        _program_id: &Buf32,
        _public_inputs: &[u8],
        _proof: &[u8],
    ) -> VerifierResult<()> {
        Err(VerifierError::Other("verifier unavailable".to_string()))
    }
}

/// Program id used for a backend in fixtures.
pub fn program_id(backend: ProofBackend) -> Buf32 {
    Buf32::new([0x10 + backend.index() as u8; 32])
}

/// Address a backend's verifier is bound at in fixtures.
pub fn verifier_address(backend: ProofBackend) -> Address {
    Address::new([0xa0 + backend.index() as u8; 20])
}

/// A live digest verifier binding for a backend.
pub fn live_binding(backend: ProofBackend) -> VerifierBinding {
    VerifierBinding::live(
        verifier_address(backend),
        DigestVerifier::new(program_id(backend)),
    )
}

/// Live digest verifier bindings for all backends.
pub fn live_bindings() -> [VerifierBinding; 3] {
    ProofBackend::ALL.map(live_binding)
}

/// Same as [`live_bindings`], but with the given backends bypassed.
pub fn bindings_bypassing(bypassed: &[ProofBackend]) -> [VerifierBinding; 3] {
    ProofBackend::ALL.map(|backend| {
        if bypassed.contains(&backend) {
            VerifierBinding::Bypassed
        } else {
            live_binding(backend)
        }
    })
}

/// Public inputs fixtures commit to for a block.
pub fn public_inputs(height: u64, state_root: &Buf32) -> Vec<u8> {
    let mut buf = height.to_be_bytes().to_vec();
    buf.extend_from_slice(state_root.as_slice());
    buf
}

/// Proof bundle the [`live_bindings`] verifiers accept.
pub fn valid_proofs(height: u64, state_root: &Buf32) -> ProofBundle {
    let inputs = public_inputs(height, state_root);
    let [risc0, sp1, pico] = ProofBackend::ALL.map(|backend| {
        let program = program_id(backend);
        let proof = DigestVerifier::prove(&program, &inputs);
        ProofPayload::new(program, inputs.clone(), proof)
    });
    ProofBundle::new(risc0, sp1, pico)
}

/// Payload no verifier accepts.
pub fn garbage_payload() -> ProofPayload {
    ProofPayload::new(Buf32::zero(), b"garbage".to_vec(), b"not a proof".to_vec())
}
