use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a fixed-size buffer from a hex string.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("expected {expected} hex-encoded bytes, got {got} hex chars")]
pub struct ParseBufError {
    expected: usize,
    got: usize,
}

impl ParseBufError {
    pub(crate) fn new(expected: usize, got: usize) -> Self {
        Self { expected, got }
    }
}

// 20-byte buf, the size of an account address
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, BorshSerialize, BorshDeserialize)]
pub struct Buf20([u8; 20]);
impl_buf!(Buf20, 20);

// 32-byte buf, useful for hashes and roots
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, BorshSerialize, BorshDeserialize)]
pub struct Buf32([u8; 32]);
impl_buf!(Buf32, 32);

/// Address of an account or contract on the base chain.
///
/// The zero address is used as the "unset" value and is never a valid
/// binding.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    arbitrary::Arbitrary,
)]
pub struct Address(Buf20);

impl_buf_wrapper!(Address, Buf20, 20);
