//! Scoped key-value state transactions for txnotify.
//!
//! This crate provides:
//! - [`StateTx`] / [`StateStore`] trait boundaries: a bucketed get/put
//!   surface inside one atomic commit-or-rollback update
//! - [`MemoryStateStore`] for tests and embedding
//! - [`FileStateStore`], a bincode snapshot with atomic file replacement
//!
//! The wallet core is written against the traits; the persistence engine
//! behind them is the caller's choice and is injected at the entry point.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileStateStore;
pub use memory::MemoryStateStore;
pub use traits::{StateStore, StateTx};
