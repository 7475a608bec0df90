use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::memory::{BucketTx, Buckets};
use crate::traits::{StateStore, StateTx};

/// File-backed state store holding one bincode snapshot of the bucket map.
///
/// Every `update` loads the snapshot, runs the closure against a working
/// copy, and on `Ok` writes a fresh snapshot to a temporary file in the
/// same directory before atomically renaming it over the target path. A
/// crash mid-commit leaves either the old snapshot or the new one, never a
/// torn file. A missing snapshot file reads as an empty store.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Open a store backed by the snapshot file at `path`. The file is not
    /// created until the first committed update.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Buckets> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Buckets::new());
            }
            Err(e) => return Err(e.into()),
        };
        bincode::deserialize(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn commit(&self, buckets: &Buckets) -> StoreResult<()> {
        let encoded =
            bincode::serialize(buckets).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        tmp.write_all(&encoded)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!(path = %self.path.display(), bytes = encoded.len(), "state snapshot committed");
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn update<T, E>(&self, f: impl FnOnce(&mut dyn StateTx) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut tx = BucketTx::new(self.load().map_err(E::from)?);
        let out = f(&mut tx)?;
        self.commit(&tx.buckets).map_err(E::from)?;
        Ok(out)
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .finish()
    }
}
