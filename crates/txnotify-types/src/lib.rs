//! Foundation types for txnotify.
//!
//! This crate provides the identifier, record, and account types used
//! throughout the txnotify system. Every other txnotify crate depends on
//! `txnotify-types`.
//!
//! # Key Types
//!
//! - [`TxHash`] — 81-tryte transaction identifier
//! - [`BundleHash`] — 81-tryte bundle identifier grouping related transactions
//! - [`Address`] — 81-tryte wallet address
//! - [`TxRecord`] — the per-transaction data fetched from the ledger API
//! - [`Account`] / [`Balance`] — wallet account entries with per-address balances

pub mod account;
pub mod error;
pub mod hash;
pub mod record;

pub use account::{Account, Balance};
pub use error::TypeError;
pub use hash::{Address, BundleHash, TxHash, HASH_TRYTES};
pub use record::TxRecord;
