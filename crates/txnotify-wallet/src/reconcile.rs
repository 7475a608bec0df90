//! Balance reconciliation and pending-bundle collection.
//!
//! Newly confirmed value transfers credit the owning balance entry; newly
//! seen ones only queue a notification. Confirmation marks are durable
//! before balance application is guaranteed, so a failed record fetch or
//! address resolution loses that cycle's balance effect (logged, never
//! fatal). This mirrors the ledger's observed behavior: confirmation wins,
//! balance update is best effort.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use txnotify_ledger::LedgerApi;
use txnotify_store::StateTx;
use txnotify_types::{BundleHash, TxHash};

use crate::accounts;
use crate::error::WalletError;

/// Apply balance deltas for `newly_confirmed` and collect the bundles of
/// every value-bearing transaction, confirmed or newly seen, into the
/// pending-notification set.
///
/// Record fetches that fail are skipped (transient, logged); persistence
/// failures abort the surrounding transaction.
pub fn reconcile_balances<A: LedgerApi + ?Sized>(
    tx: &mut dyn StateTx,
    api: &A,
    newly_confirmed: &[TxHash],
    newly_seen: &[TxHash],
) -> Result<BTreeSet<BundleHash>, WalletError> {
    let mut pending = BTreeSet::new();

    if !newly_confirmed.is_empty() {
        match api.transaction_records(newly_confirmed) {
            Ok(records) => {
                let mut accounts = accounts::list_accounts(tx)?;
                let mut dirty = false;
                for record in &records {
                    if !record.has_value() {
                        continue;
                    }
                    pending.insert(record.bundle.clone());
                    match accounts::find_balance(&accounts, &record.address) {
                        Some((ai, bi)) => {
                            let balance = &mut accounts[ai].balances[bi];
                            balance.value += record.value;
                            balance.change = 0;
                            dirty = true;
                            debug!(
                                address = record.address.short(),
                                value = record.value,
                                "balance credited for confirmed transaction"
                            );
                        }
                        None => {
                            // Already confirmed in the registry, so this
                            // record never comes back: the balance effect
                            // for it is lost.
                            warn!(
                                address = record.address.short(),
                                "no tracked balance for confirmed transaction, skipping"
                            );
                        }
                    }
                }
                if dirty {
                    accounts::put_accounts(tx, &accounts)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "record fetch for confirmed transactions failed, skipping balance pass");
            }
        }
    }

    if !newly_seen.is_empty() {
        match api.transaction_records(newly_seen) {
            Ok(records) => {
                for record in records {
                    if record.has_value() {
                        pending.insert(record.bundle);
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "record fetch for new transactions failed, skipping their notifications");
            }
        }
    }

    Ok(pending)
}
