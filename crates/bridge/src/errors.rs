use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BridgeError {
    #[error("requested {requested} deposits but only {pending} pending")]
    InsufficientDeposits { requested: u16, pending: usize },

    #[error("withdrawals already published for block {0}")]
    WithdrawalsAlreadyPublished(u64),

    #[error("tried to publish zero withdrawals root for block {0}")]
    ZeroWithdrawalsRoot(u64),
}
