//! Deposit log hash encoding shared between the proposer and the bridge.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::buf::Buf32;

/// Number of bytes at the tail of the hash that carry the deposit count.
const COUNT_LEN: usize = 2;

/// Rolling hash over a prefix of the pending deposit queue.
///
/// The low 16 bits (the last two bytes, big-endian) carry the number of
/// deposits the hash covers.  The all-zero value means "no deposit activity".
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct DepositLogsHash(Buf32);

impl_buf_wrapper!(DepositLogsHash, Buf32, 32);

impl DepositLogsHash {
    /// Builds the hash for `count` deposits from a digest over their log
    /// hashes, overwriting the digest's tail with the count.
    pub fn from_digest(digest: Buf32, count: u16) -> Self {
        let mut buf: [u8; 32] = digest.into();
        buf[32 - COUNT_LEN..].copy_from_slice(&count.to_be_bytes());
        Self::new(buf)
    }

    /// Returns the number of deposits this hash covers.
    pub fn count(&self) -> u16 {
        let bytes = self.0.as_slice();
        u16::from_be_bytes([bytes[30], bytes[31]])
    }

    /// Returns if this hash signals that there was no deposit activity.
    pub fn is_null(&self) -> bool {
        self.0.is_zero()
    }
}
