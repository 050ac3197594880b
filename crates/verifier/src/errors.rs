use bastion_primitives::buf::Buf32;
use thiserror::Error;

pub type VerifierResult<T> = Result<T, VerifierError>;

/// Reasons a backend refuses a proof.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum VerifierError {
    /// The proof was made for a different program than the one bound.
    #[error("program mismatch (expected {expected}, got {got})")]
    ProgramMismatch { expected: Buf32, got: Buf32 },

    /// The proof does not attest to the given public inputs.
    #[error("invalid proof: {0}")]
    InvalidProof(String),

    /// Proof bytes could not be decoded.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// Generic error for other backend failures.
    #[error("{0}")]
    Other(String),
}
