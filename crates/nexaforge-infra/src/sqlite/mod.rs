//! SQLite storage layer.
//!
//! Blueprint repository backed by SQLite with WAL mode and split read/write
//! connection pools.

pub mod blueprint;
pub mod pool;
