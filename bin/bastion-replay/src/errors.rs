use std::{io, path::PathBuf};

use bastion_proposer::ProposerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("read {0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("parse script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("initialize proposer: {0}")]
    Proposer(#[from] ProposerError),
}

#[derive(Debug, Error)]
pub enum StepError {
    #[error("step {0}: {1}")]
    Proposer(usize, #[source] ProposerError),

    #[error("step {0}: verifying block {1} that has no commitment to derive proofs from")]
    NoCommitment(usize, u64),

    #[error("step {0}: {1}")]
    Bridge(usize, #[source] bastion_bridge::BridgeError),
}
