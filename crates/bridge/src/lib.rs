//! Deposit and withdrawal bookkeeping the settlement layer reconciles
//! against.
//!
//! The [`DepositLedger`] trait is the boundary the proposer talks to.
//! [`PendingDepositLedger`] is an in-memory ledger implementing it, keeping
//! deposits in a [`StateQueue`] until a verified block consumes them.

pub mod errors;
pub mod ledger;
pub mod log;
pub mod pending;
pub mod state_queue;

pub use errors::{BridgeError, BridgeResult};
pub use ledger::{DepositLedger, DepositSink};
pub use log::DepositLog;
pub use pending::{compute_deposit_logs_hash, PendingDepositLedger};
pub use state_queue::StateQueue;
