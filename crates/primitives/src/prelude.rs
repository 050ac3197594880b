pub use crate::{
    buf::{Address, Buf20, Buf32},
    deposit::DepositLogsHash,
};
