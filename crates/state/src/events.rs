use bastion_primitives::buf::Buf32;
use serde::{Deserialize, Serialize};

/// Notifications emitted for external indexers after a successful call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProposerEvent {
    /// A new block commitment was accepted.
    BlockCommitted { height: u64, new_state_root: Buf32 },

    /// A committed block had its proofs accepted.
    BlockVerified { height: u64 },
}
