//! Durable transaction tracking for txnotify.
//!
//! This crate is the heart of the notify pipeline. It provides:
//! - [`TxRegistry`], the persisted set of every transaction hash the wallet
//!   has seen, each tagged confirmed or unconfirmed
//! - Candidate-set diffing that yields newly seen hashes in caller order
//! - [`resolve_confirmations`], the per-hash inclusion pass against the
//!   ledger's consensus oracle
//! - The [`LedgerApi`] boundary to the external query node
//!
//! Tracked hashes are never removed and a confirmed mark is never unset.

pub mod error;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use error::{ApiError, LedgerError};
pub use registry::{TrackedTx, TxRegistry};
pub use resolver::resolve_confirmations;
pub use traits::LedgerApi;
