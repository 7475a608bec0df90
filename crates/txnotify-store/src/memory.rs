use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::{StateStore, StateTx};

/// Nested bucket map shared by the in-memory and file-backed stores.
pub(crate) type Buckets = BTreeMap<String, BTreeMap<String, Vec<u8>>>;

/// Working copy of the bucket map for one transaction.
pub(crate) struct BucketTx {
    pub(crate) buckets: Buckets,
}

impl BucketTx {
    pub(crate) fn new(buckets: Buckets) -> Self {
        Self { buckets }
    }
}

impl StateTx for BucketTx {
    fn get(&self, bucket: &str, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self
            .buckets
            .get(bucket)
            .and_then(|b| b.get(key))
            .cloned())
    }

    fn put(&mut self, bucket: &str, key: &str, value: &[u8]) -> StoreResult<()> {
        let b = self
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| StoreError::BucketMissing(bucket.to_string()))?;
        b.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn create_bucket_if_not_exists(&mut self, bucket: &str) -> StoreResult<()> {
        self.buckets.entry(bucket.to_string()).or_default();
        Ok(())
    }
}

/// In-memory, map-based state store.
///
/// Intended for tests and embedding. `update` clones the bucket map, runs
/// the closure against the clone, and swaps the clone in only on `Ok`, so a
/// failed transaction leaves the store untouched.
pub struct MemoryStateStore {
    buckets: RwLock<Buckets>,
}

impl MemoryStateStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(Buckets::new()),
        }
    }

    /// Read a value outside any transaction. Test convenience.
    pub fn peek(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.buckets
            .read()
            .expect("lock poisoned")
            .get(bucket)
            .and_then(|b| b.get(key))
            .cloned()
    }

    /// Number of buckets currently present.
    pub fn bucket_count(&self) -> usize {
        self.buckets.read().expect("lock poisoned").len()
    }
}

impl Default for MemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStateStore {
    fn update<T, E>(&self, f: impl FnOnce(&mut dyn StateTx) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let snapshot = self.buckets.read().expect("lock poisoned").clone();
        let mut tx = BucketTx::new(snapshot);
        let out = f(&mut tx)?;
        *self.buckets.write().expect("lock poisoned") = tx.buckets;
        Ok(out)
    }
}

impl std::fmt::Debug for MemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStateStore")
            .field("bucket_count", &self.bucket_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_without_bucket_fails() {
        let store = MemoryStateStore::new();
        let err = store
            .update(|tx| tx.put("missing", "k", b"v"))
            .unwrap_err();
        assert!(matches!(err, StoreError::BucketMissing(_)));
    }

    #[test]
    fn create_bucket_then_put_and_get() {
        let store = MemoryStateStore::new();
        store
            .update(|tx| {
                tx.create_bucket_if_not_exists("data")?;
                tx.put("data", "k", b"v")?;
                // Reads inside the transaction see the write.
                assert_eq!(tx.get("data", "k")?, Some(b"v".to_vec()));
                Ok::<_, StoreError>(())
            })
            .unwrap();
        assert_eq!(store.peek("data", "k"), Some(b"v".to_vec()));
    }

    #[test]
    fn get_missing_bucket_is_none() {
        let store = MemoryStateStore::new();
        store
            .update(|tx| {
                assert_eq!(tx.get("nope", "k")?, None);
                Ok::<_, StoreError>(())
            })
            .unwrap();
    }

    #[test]
    fn create_bucket_is_idempotent() {
        let store = MemoryStateStore::new();
        store
            .update(|tx| {
                tx.create_bucket_if_not_exists("data")?;
                tx.put("data", "k", b"v")?;
                tx.create_bucket_if_not_exists("data")?;
                // Existing contents survive a repeated create.
                assert_eq!(tx.get("data", "k")?, Some(b"v".to_vec()));
                Ok::<_, StoreError>(())
            })
            .unwrap();
    }

    #[test]
    fn failed_update_rolls_back() {
        let store = MemoryStateStore::new();
        store
            .update(|tx| {
                tx.create_bucket_if_not_exists("data")?;
                tx.put("data", "k", b"old")
            })
            .unwrap();

        let err: Result<(), StoreError> = store.update(|tx| {
            tx.put("data", "k", b"new")?;
            Err(StoreError::Serialization("boom".into()))
        });
        assert!(err.is_err());

        // The failed write never landed.
        assert_eq!(store.peek("data", "k"), Some(b"old".to_vec()));
    }

    #[test]
    fn put_replaces_existing_value() {
        let store = MemoryStateStore::new();
        store
            .update(|tx| {
                tx.create_bucket_if_not_exists("data")?;
                tx.put("data", "k", b"one")?;
                tx.put("data", "k", b"two")
            })
            .unwrap();
        assert_eq!(store.peek("data", "k"), Some(b"two".to_vec()));
    }

    #[test]
    fn custom_error_type_propagates() {
        #[derive(Debug, thiserror::Error)]
        enum MyError {
            #[error("store: {0}")]
            Store(#[from] StoreError),
            #[error("domain failure")]
            Domain,
        }

        let store = MemoryStateStore::new();
        let err = store
            .update(|_tx| Err::<(), MyError>(MyError::Domain))
            .unwrap_err();
        assert!(matches!(err, MyError::Domain));
    }

    #[test]
    fn debug_format() {
        let store = MemoryStateStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("MemoryStateStore"));
    }
}
