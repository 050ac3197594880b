//! Settlement state of the rollup as tracked on the base chain: the committed
//! block metadata, the commit/verify frontiers and the write operations used
//! to advance them atomically.

pub mod commitment;
pub mod events;
pub mod settlement;
pub mod state_op;
pub mod store;

pub mod prelude;
