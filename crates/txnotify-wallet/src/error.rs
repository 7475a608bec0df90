use txnotify_ledger::{ApiError, LedgerError};
use txnotify_store::StoreError;

use crate::dispatch::DispatchFailure;

/// Errors surfaced by the notify cycle.
///
/// Everything except `Dispatch` aborts the cycle before commit and rolls
/// the state transaction back. `Dispatch` happens after commit; it carries
/// the outputs of the commands that did complete.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("account blob serialization error: {0}")]
    Serialization(String),

    #[error("candidate query failed: {0}")]
    Api(#[from] ApiError),

    #[error("config error: {0}")]
    Config(String),

    #[error("notify dispatch aborted: {0}")]
    Dispatch(#[from] DispatchFailure),
}
