//! Commit/verify state machine of the settlement layer.
//!
//! Authorized sequencers commit rollup blocks one height at a time, then
//! submit proofs for them in the same order.  Commits are reconciled against
//! the deposit ledger and verifies fan out to every live proof backend.
//! Each call either applies all of its effects or none of them.

mod access;
mod errors;
mod params;
mod proposer;
mod shared;

pub use access::InitParams;
pub use errors::{ProposerError, ProposerResult};
pub use params::ProposerParams;
pub use proposer::OnChainProposer;
pub use shared::SharedProposer;
