//! Proof verification backends the settlement layer fans out to.
//!
//! Each backend is an opaque pass/fail check over a program identifier, the
//! public inputs the program committed to, and the proof bytes.  The proposer
//! holds one [`VerifierBinding`] per [`ProofBackend`] and requires every live
//! binding to accept.

mod backend;
mod binding;
mod digest;
mod errors;
mod proof;
mod verifier;

pub use backend::*;
pub use binding::*;
pub use digest::*;
pub use errors::*;
pub use proof::*;
pub use verifier::*;
