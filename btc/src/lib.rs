//! Bitcoin chain library for Rust.
//!
//! This library provides the Bitcoin chain object model and its canonical
//! byte codec at the infrastructure level: transactions, scripts, blocks,
//! block headers, their identity hashes, and the structural queries that
//! consensus builds on (signature operation counts, dust, script patterns,
//! merkle roots, and the segregated witness commitment). It is not a wallet
//! or a client, and it does not execute scripts.

/// Contains the core chain types. Transactions, Blocks, Scripts, etc.
pub mod chain;

mod result;
pub use result::{Error, Result};
