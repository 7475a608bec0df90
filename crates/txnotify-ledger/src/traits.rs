use txnotify_types::{Address, TxHash, TxRecord};

use crate::error::ApiError;

/// Query boundary to the external ledger node.
///
/// Implementations wrap whatever transport the node speaks. All calls are
/// blocking; the pipeline issues them one at a time.
pub trait LedgerApi: Send + Sync {
    /// All transaction hashes currently associated with `addresses`.
    /// May return an empty list.
    fn find_transactions(&self, addresses: &[Address]) -> Result<Vec<TxHash>, ApiError>;

    /// Consensus inclusion state, one flag per queried hash.
    fn latest_inclusion(&self, hashes: &[TxHash]) -> Result<Vec<bool>, ApiError>;

    /// Full records for the given hashes, in the same order.
    fn transaction_records(&self, hashes: &[TxHash]) -> Result<Vec<TxRecord>, ApiError>;
}
