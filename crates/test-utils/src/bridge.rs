use bastion_bridge::{DepositLog, PendingDepositLedger};
use bastion_primitives::prelude::*;

use crate::ArbitraryGenerator;

/// Queues `n` deposits with random recipients and amounts.
pub fn queue_random_deposits(ledger: &mut PendingDepositLedger, n: usize) -> Vec<DepositLog> {
    let arb = ArbitraryGenerator::new();
    (0..n)
        .map(|_| {
            let recipient: Address = arb.generate();
            let amount: u64 = arb.generate();
            ledger.deposit(recipient, amount as u128)
        })
        .collect()
}

/// Creates a ledger with `n` random deposits pending.
pub fn ledger_with_deposits(n: usize) -> PendingDepositLedger {
    let mut ledger = PendingDepositLedger::new();
    queue_random_deposits(&mut ledger, n);
    ledger
}
