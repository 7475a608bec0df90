//! The notify cycle: one invocation of the whole pipeline.

use std::collections::BTreeSet;

use tracing::{debug, info};

use txnotify_ledger::{resolve_confirmations, LedgerApi, TxRegistry};
use txnotify_store::StateStore;
use txnotify_types::{BundleHash, TxHash};

use crate::accounts;
use crate::config::NotifyConfig;
use crate::dispatch::dispatch_notifications;
use crate::error::WalletError;
use crate::reconcile::reconcile_balances;

/// What one notify cycle observed and did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Hashes tracked for the first time this cycle, in candidate order.
    pub newly_seen: Vec<TxHash>,
    /// Hashes that transitioned to confirmed this cycle.
    pub newly_confirmed: Vec<TxHash>,
    /// Captured stdout of each notify command, in dispatch order.
    pub outputs: Vec<String>,
}

/// Run one notify cycle.
///
/// All durable work happens in a single state transaction: candidate
/// diffing, confirmation resolution, registry persistence, and balance
/// reconciliation commit together or not at all. Notification dispatch
/// runs strictly after the commit, so a failing subprocess can never roll
/// back confirmed state; its error carries the outputs gathered before the
/// failure.
///
/// The caller serializes invocations: at most one cycle runs at a time.
pub fn run_notify_cycle<S, A>(
    store: &S,
    api: &A,
    config: &NotifyConfig,
) -> Result<CycleReport, WalletError>
where
    S: StateStore,
    A: LedgerApi,
{
    info!("starting notify cycle");
    let (newly_seen, newly_confirmed, pending) = store.update(|tx| {
        let accounts = accounts::list_accounts(tx)?;
        if accounts.is_empty() {
            debug!("no accounts in wallet");
            return Ok(empty_cycle());
        }

        let addresses = accounts::all_addresses(&accounts);
        let candidates = api.find_transactions(&addresses).map_err(WalletError::Api)?;
        if candidates.is_empty() {
            debug!("no transactions for wallet addresses");
            return Ok(empty_cycle());
        }

        let mut registry = TxRegistry::load(tx)?;
        let newly_seen = registry.absorb(&candidates);
        let newly_confirmed = resolve_confirmations(&mut registry, api);
        registry.save(tx)?;

        if newly_seen.is_empty() && newly_confirmed.is_empty() {
            debug!("no transitions this cycle");
            return Ok((newly_seen, newly_confirmed, BTreeSet::new()));
        }

        let pending = reconcile_balances(tx, api, &newly_confirmed, &newly_seen)?;
        Ok::<_, WalletError>((newly_seen, newly_confirmed, pending))
    })?;

    let outputs = dispatch_notifications(&config.notify, &pending)?;

    info!(
        seen = newly_seen.len(),
        confirmed = newly_confirmed.len(),
        notified = outputs.len(),
        "notify cycle complete"
    );
    Ok(CycleReport {
        newly_seen,
        newly_confirmed,
        outputs,
    })
}

fn empty_cycle() -> (Vec<TxHash>, Vec<TxHash>, BTreeSet<BundleHash>) {
    (Vec::new(), Vec::new(), BTreeSet::new())
}
