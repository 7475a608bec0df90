/// Errors from state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A `put` targeted a bucket that was never created.
    #[error("bucket not found: {0}")]
    BucketMissing(String),

    /// Snapshot encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
