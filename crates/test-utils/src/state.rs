use bastion_primitives::prelude::*;
use bastion_state::commitment::BlockCommitment;

use crate::ArbitraryGenerator;

/// State root fixtures use for a height.
pub fn state_root(height: u64) -> Buf32 {
    let mut buf = [0xcc; 32];
    buf[24..].copy_from_slice(&height.to_be_bytes());
    Buf32::new(buf)
}

/// Commitment without deposits or withdrawals.
pub fn plain_commitment(height: u64) -> BlockCommitment {
    commitment_with(height, DepositLogsHash::zero(), Buf32::zero())
}

/// Commitment for a height claiming the given deposits and withdrawals.
pub fn commitment_with(
    height: u64,
    deposits: DepositLogsHash,
    withdrawals_root: Buf32,
) -> BlockCommitment {
    let arb = ArbitraryGenerator::new_with_size(64);
    let state_diff: Buf32 = arb.generate();
    BlockCommitment::new(state_root(height), state_diff, deposits, withdrawals_root)
}
