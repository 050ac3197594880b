use bastion_primitives::prelude::*;

use crate::{errors::BridgeResult, log::DepositLog};

/// The deposit/withdrawal ledger as seen by the proposer.
pub trait DepositLedger {
    /// Computes the rolling hash over the first `count` pending deposits.
    /// Does not modify the queue.
    fn pending_deposits_hash(&self, count: u16) -> BridgeResult<DepositLogsHash>;

    /// Records the withdrawals root for a block so withdrawals can later be
    /// proven against it.
    fn publish_withdrawals(&mut self, height: u64, root: Buf32) -> BridgeResult<()>;

    /// Drops the first `count` pending deposits.  Fails without removing
    /// anything if fewer than `count` are pending.
    fn remove_pending_deposits(&mut self, count: u16) -> BridgeResult<()>;
}

impl<T: DepositLedger + ?Sized> DepositLedger for Box<T> {
    fn pending_deposits_hash(&self, count: u16) -> BridgeResult<DepositLogsHash> {
        (**self).pending_deposits_hash(count)
    }

    fn publish_withdrawals(&mut self, height: u64, root: Buf32) -> BridgeResult<()> {
        (**self).publish_withdrawals(height, root)
    }

    fn remove_pending_deposits(&mut self, count: u16) -> BridgeResult<()> {
        (**self).remove_pending_deposits(count)
    }
}

/// Intake side of the ledger.  Deposits can only be appended, so whoever
/// feeds deposits in can't reorder or drop ones a commitment already covers.
pub trait DepositSink {
    /// Appends a deposit to the back of the pending queue.
    fn record_deposit(&mut self, recipient: Address, amount: u128) -> DepositLog;
}
