use tracing::{debug, warn};

use txnotify_types::TxHash;

use crate::registry::TxRegistry;
use crate::traits::LedgerApi;

/// Query the inclusion oracle for every unconfirmed tracked hash and mark
/// the confirmed ones.
///
/// Each hash is queried on its own. A failed query is logged and skipped;
/// the entry stays unconfirmed and is retried on the next cycle. Returns
/// the hashes that transitioned to confirmed during this pass.
pub fn resolve_confirmations<A: LedgerApi + ?Sized>(
    registry: &mut TxRegistry,
    api: &A,
) -> Vec<TxHash> {
    let mut newly_confirmed = Vec::new();
    for hash in registry.unconfirmed() {
        let flags = match api.latest_inclusion(std::slice::from_ref(&hash)) {
            Ok(flags) => flags,
            Err(e) => {
                warn!(tx = hash.short(), error = %e, "inclusion query failed, retrying next cycle");
                continue;
            }
        };
        if flags.first().copied().unwrap_or(false) {
            debug!(tx = hash.short(), "transaction confirmed");
            registry.mark_confirmed(&hash);
            newly_confirmed.push(hash);
        }
    }
    newly_confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use txnotify_types::{Address, TxRecord, HASH_TRYTES};

    use crate::error::ApiError;

    fn hash(fill: char) -> TxHash {
        let s: String = std::iter::repeat(fill).take(HASH_TRYTES).collect();
        TxHash::from_trytes(&s).unwrap()
    }

    /// Oracle stub with scripted inclusion answers and failure injection.
    #[derive(Default)]
    struct StubApi {
        included: HashMap<TxHash, bool>,
        failing: HashSet<TxHash>,
        queried: Mutex<Vec<TxHash>>,
    }

    impl StubApi {
        fn include(mut self, h: TxHash) -> Self {
            self.included.insert(h, true);
            self
        }

        fn fail_for(mut self, h: TxHash) -> Self {
            self.failing.insert(h);
            self
        }
    }

    impl LedgerApi for StubApi {
        fn find_transactions(&self, _addresses: &[Address]) -> Result<Vec<TxHash>, ApiError> {
            unimplemented!("not used by the resolver")
        }

        fn latest_inclusion(&self, hashes: &[TxHash]) -> Result<Vec<bool>, ApiError> {
            let h = &hashes[0];
            self.queried.lock().unwrap().push(h.clone());
            if self.failing.contains(h) {
                return Err(ApiError("node unreachable".into()));
            }
            Ok(vec![self.included.get(h).copied().unwrap_or(false)])
        }

        fn transaction_records(&self, _hashes: &[TxHash]) -> Result<Vec<TxRecord>, ApiError> {
            unimplemented!("not used by the resolver")
        }
    }

    #[test]
    fn included_hashes_become_confirmed() {
        let mut reg = TxRegistry::default();
        reg.absorb(&[hash('A'), hash('B')]);
        let api = StubApi::default().include(hash('A'));

        let confirmed = resolve_confirmations(&mut reg, &api);
        assert_eq!(confirmed, vec![hash('A')]);
        assert_eq!(reg.is_confirmed(&hash('A')), Some(true));
        assert_eq!(reg.is_confirmed(&hash('B')), Some(false));
    }

    #[test]
    fn oracle_failure_skips_entry_without_aborting() {
        let mut reg = TxRegistry::default();
        reg.absorb(&[hash('A'), hash('B')]);
        let api = StubApi::default().fail_for(hash('A')).include(hash('B'));

        let confirmed = resolve_confirmations(&mut reg, &api);
        // The failing entry is skipped, the rest of the pass still runs.
        assert_eq!(confirmed, vec![hash('B')]);
        assert_eq!(reg.is_confirmed(&hash('A')), Some(false));
    }

    #[test]
    fn confirmed_entries_are_not_requeried() {
        let mut reg = TxRegistry::default();
        reg.absorb(&[hash('A'), hash('B')]);
        reg.mark_confirmed(&hash('A'));
        let api = StubApi::default();

        resolve_confirmations(&mut reg, &api);
        let queried = api.queried.lock().unwrap().clone();
        assert_eq!(queried, vec![hash('B')]);
    }

    #[test]
    fn skipped_entry_is_retried_on_next_pass() {
        let mut reg = TxRegistry::default();
        reg.absorb(&[hash('A')]);

        let failing = StubApi::default().fail_for(hash('A'));
        assert!(resolve_confirmations(&mut reg, &failing).is_empty());

        // Next cycle the oracle is healthy and reports inclusion.
        let healthy = StubApi::default().include(hash('A'));
        let confirmed = resolve_confirmations(&mut reg, &healthy);
        assert_eq!(confirmed, vec![hash('A')]);
    }

    #[test]
    fn nothing_unconfirmed_queries_nothing() {
        let mut reg = TxRegistry::default();
        let api = StubApi::default();
        assert!(resolve_confirmations(&mut reg, &api).is_empty());
        assert!(api.queried.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_inclusion_reply_is_treated_as_not_included() {
        struct EmptyReply;
        impl LedgerApi for EmptyReply {
            fn find_transactions(&self, _a: &[Address]) -> Result<Vec<TxHash>, ApiError> {
                unimplemented!()
            }
            fn latest_inclusion(&self, _h: &[TxHash]) -> Result<Vec<bool>, ApiError> {
                Ok(Vec::new())
            }
            fn transaction_records(&self, _h: &[TxHash]) -> Result<Vec<TxRecord>, ApiError> {
                unimplemented!()
            }
        }

        let mut reg = TxRegistry::default();
        reg.absorb(&[hash('A')]);
        assert!(resolve_confirmations(&mut reg, &EmptyReply).is_empty());
        assert_eq!(reg.is_confirmed(&hash('A')), Some(false));
    }
}
