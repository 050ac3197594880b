pub use crate::{
    commitment::BlockCommitment, events::ProposerEvent, settlement::SettlementState,
    state_op::WriteBatch, store::CommitmentStore,
};
