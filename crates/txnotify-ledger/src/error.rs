use txnotify_store::StoreError;

/// Errors produced by registry persistence. These are fatal for the
/// invoking cycle: the surrounding state transaction rolls back.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("registry serialization error: {0}")]
    Serialization(String),
}

/// A failed call to the external ledger query API.
///
/// Carries only a description: the caller decides whether the failure is
/// transient (skip and retry next cycle) or fatal for the invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ledger api error: {0}")]
pub struct ApiError(pub String);
