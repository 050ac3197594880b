use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// The proof systems a block is verified against, in the order they're
/// checked.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProofBackend {
    Risc0,
    Sp1,
    Pico,
}

impl ProofBackend {
    /// All backends in verification order.
    pub const ALL: [ProofBackend; 3] = [ProofBackend::Risc0, ProofBackend::Sp1, ProofBackend::Pico];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Risc0 => "risc0",
            Self::Sp1 => "sp1",
            Self::Pico => "pico",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ProofBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
