//! Configuration model for running a proposer, loaded from TOML.

mod config;
mod verifier;

pub use config::*;
pub use verifier::*;
