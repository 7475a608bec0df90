use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use txnotify_store::StateTx;
use txnotify_types::TxHash;

use crate::error::LedgerError;

const HASHES_BUCKET: &str = "hashes";
const HASHES_KEY: &str = "hashes";

/// One tracked transaction: its hash and whether consensus has confirmed
/// it. `confirmed` only ever moves false to true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedTx {
    pub hash: TxHash,
    pub confirmed: bool,
}

/// The durable set of every transaction hash this wallet has seen.
///
/// Entries are appended when a hash first shows up in a candidate set and
/// are never removed. The registry is loaded, diffed, mutated, and saved
/// within one state transaction per cycle; it owns the `hashes` bucket
/// exclusively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxRegistry {
    entries: Vec<TrackedTx>,
}

impl TxRegistry {
    /// Load the persisted registry. An absent bucket or key reads as an
    /// empty registry (first run); a blob that fails to decode is fatal.
    pub fn load(tx: &dyn StateTx) -> Result<Self, LedgerError> {
        match tx.get(HASHES_BUCKET, HASHES_KEY)? {
            Some(bytes) => {
                let entries = serde_json::from_slice(&bytes)
                    .map_err(|e| LedgerError::Serialization(e.to_string()))?;
                Ok(Self { entries })
            }
            None => Ok(Self::default()),
        }
    }

    /// Persist the registry back into the same transaction it was loaded
    /// from, creating the bucket on first run.
    pub fn save(&self, tx: &mut dyn StateTx) -> Result<(), LedgerError> {
        tx.create_bucket_if_not_exists(HASHES_BUCKET)?;
        let bytes = serde_json::to_vec(&self.entries)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        tx.put(HASHES_BUCKET, HASHES_KEY, &bytes)?;
        Ok(())
    }

    /// Diff `candidates` against the tracked set and append every hash not
    /// yet tracked as a new unconfirmed entry.
    ///
    /// Returns the newly seen hashes in candidate order (duplicates within
    /// `candidates` collapse to their first occurrence). Nothing is ever
    /// removed from the registry.
    pub fn absorb(&mut self, candidates: &[TxHash]) -> Vec<TxHash> {
        let newly_seen: Vec<TxHash> = {
            let known: HashSet<&TxHash> = self.entries.iter().map(|e| &e.hash).collect();
            let mut out: Vec<TxHash> = Vec::new();
            for candidate in candidates {
                if !known.contains(candidate) && !out.contains(candidate) {
                    out.push(candidate.clone());
                }
            }
            out
        };
        self.entries.extend(newly_seen.iter().cloned().map(|hash| TrackedTx {
            hash,
            confirmed: false,
        }));
        newly_seen
    }

    /// Hashes still awaiting confirmation, in tracking order.
    pub fn unconfirmed(&self) -> Vec<TxHash> {
        self.entries
            .iter()
            .filter(|e| !e.confirmed)
            .map(|e| e.hash.clone())
            .collect()
    }

    /// Mark `hash` as confirmed. Idempotent; a confirmed entry is never
    /// reverted, and an unknown hash is ignored.
    pub fn mark_confirmed(&mut self, hash: &TxHash) {
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.hash == hash) {
            entry.confirmed = true;
        }
    }

    /// Confirmation state of `hash`, or `None` if untracked.
    pub fn is_confirmed(&self, hash: &TxHash) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| &e.hash == hash)
            .map(|e| e.confirmed)
    }

    /// All tracked entries, in tracking order.
    pub fn entries(&self) -> &[TrackedTx] {
        &self.entries
    }

    /// Number of tracked hashes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
