use bastion_bridge::BridgeError;
use bastion_primitives::prelude::*;
use bastion_verifier::{ProofBackend, VerifierError};
use thiserror::Error;

pub type ProposerResult<T> = Result<T, ProposerError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ProposerError {
    #[error("caller {0} is not an authorized sequencer")]
    Unauthorized(Address),

    #[error("proposer already initialized")]
    AlreadyInitialized,

    #[error("proposer not initialized")]
    Uninitialized,

    #[error("invalid {0} address {1}")]
    InvalidAddress(&'static str, Address),

    #[error("out of order commit (expected block {expected}, got {got})")]
    OutOfOrderCommit { expected: u64, got: u64 },

    #[error("block {0} already committed")]
    DuplicateCommit(u64),

    #[error("out of order verify (expected block {expected}, got {got})")]
    OutOfOrderVerify { expected: u64, got: u64 },

    #[error("block {0} has not been committed")]
    UncommittedBlock(u64),

    #[error("deposit logs mismatch (ledger {expected}, claimed {got})")]
    DepositMismatch {
        expected: DepositLogsHash,
        got: DepositLogsHash,
    },

    #[error("{backend} verifier rejected proof: {reason}")]
    ProofRejected {
        backend: ProofBackend,
        reason: VerifierError,
    },

    #[error("bridge: {0}")]
    Bridge(#[from] BridgeError),
}
