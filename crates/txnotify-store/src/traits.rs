use crate::error::{StoreError, StoreResult};

/// One scoped read-write transaction over a bucketed key-value state.
///
/// All implementations must satisfy these invariants:
/// - Reads observe the state as of the start of the transaction plus any
///   writes made through this same transaction.
/// - `get` on a missing bucket or key returns `Ok(None)`, never an error.
/// - `put` requires the bucket to exist; callers create buckets explicitly
///   with `create_bucket_if_not_exists`.
/// - The store never interprets values, they are opaque bytes.
pub trait StateTx {
    /// Read the value stored under `bucket`/`key`.
    fn get(&self, bucket: &str, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `bucket`/`key`, replacing any existing value.
    fn put(&mut self, bucket: &str, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Create `bucket` if it does not exist yet. Idempotent.
    fn create_bucket_if_not_exists(&mut self, bucket: &str) -> StoreResult<()>;
}

/// A persistent state store exposing an atomic update boundary.
///
/// `update` runs the closure against a working copy of the state. If the
/// closure returns `Ok`, every write it made commits as one unit; if it
/// returns `Err`, nothing is persisted. Implementations assume at most one
/// update runs at a time (the caller serializes invocations).
pub trait StateStore: Send + Sync {
    /// Run `f` inside one read-write transaction with commit-on-`Ok`,
    /// rollback-on-`Err` semantics.
    fn update<T, E>(&self, f: impl FnOnce(&mut dyn StateTx) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>;
}
