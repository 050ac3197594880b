use bastion_primitives::buf::Address;
use serde::{Deserialize, Serialize};

use crate::verifier::VerifiersConfig;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProposerConfig {
    /// The proposer's own address.
    pub address: Address,

    /// Whether state diffs are withheld from the base chain.
    #[serde(default)]
    pub validium: bool,

    /// Keep verified commitments instead of pruning them.
    #[serde(default)]
    pub retain_history: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Address of the deposit ledger.
    pub address: Address,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Addresses allowed to commit and verify.
    #[serde(default)]
    pub sequencers: Vec<Address>,

    pub proposer: ProposerConfig,
    pub bridge: BridgeConfig,
    pub verifiers: VerifiersConfig,
}
