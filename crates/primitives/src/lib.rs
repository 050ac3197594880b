//! Collection of generic internal data types that are used widely across the
//! settlement crates.

#[macro_use]
mod macros;

pub mod buf;
pub mod deposit;
pub mod hash;

pub mod prelude;
