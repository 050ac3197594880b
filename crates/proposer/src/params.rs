use bastion_primitives::buf::Address;
use serde::{Deserialize, Serialize};

/// Construction-time parameters of a proposer.  These never change after
/// the proposer is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProposerParams {
    /// The proposer's own address, which can't be bound as a collaborator.
    pub address: Address,

    /// If set, state diffs are not published to the base chain.  Only
    /// recorded here for readers, the proposer doesn't act on it.
    #[serde(default)]
    pub validium: bool,

    /// Keep commitments of verified blocks instead of pruning each one once
    /// its successor is verified.
    #[serde(default)]
    pub retain_history: bool,
}

impl ProposerParams {
    pub fn new(address: Address, validium: bool) -> Self {
        Self {
            address,
            validium,
            retain_history: false,
        }
    }

    pub fn with_retain_history(mut self, retain_history: bool) -> Self {
        self.retain_history = retain_history;
        self
    }
}
