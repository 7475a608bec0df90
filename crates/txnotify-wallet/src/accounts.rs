//! Account book persistence.
//!
//! Accounts live as one JSON blob in the `accounts` bucket of the same
//! state transaction that carries the transaction registry, so balance
//! updates and confirmation marks commit together.

use txnotify_store::StateTx;
use txnotify_types::{Account, Address};

use crate::error::WalletError;

const ACCOUNTS_BUCKET: &str = "accounts";
const ACCOUNTS_KEY: &str = "accounts";

/// Load every account in the wallet. Absent bucket or key reads as an
/// empty wallet.
pub fn list_accounts(tx: &dyn StateTx) -> Result<Vec<Account>, WalletError> {
    match tx.get(ACCOUNTS_BUCKET, ACCOUNTS_KEY)? {
        Some(bytes) => {
            serde_json::from_slice(&bytes).map_err(|e| WalletError::Serialization(e.to_string()))
        }
        None => Ok(Vec::new()),
    }
}

/// Persist the full account list, creating the bucket on first write.
pub fn put_accounts(tx: &mut dyn StateTx, accounts: &[Account]) -> Result<(), WalletError> {
    tx.create_bucket_if_not_exists(ACCOUNTS_BUCKET)?;
    let bytes =
        serde_json::to_vec(accounts).map_err(|e| WalletError::Serialization(e.to_string()))?;
    tx.put(ACCOUNTS_BUCKET, ACCOUNTS_KEY, &bytes)?;
    Ok(())
}

/// Locate the balance entry owning `address`.
///
/// Returns `(account index, balance index)` or `None` if no tracked
/// account owns the address.
pub fn find_balance(accounts: &[Account], address: &Address) -> Option<(usize, usize)> {
    accounts
        .iter()
        .enumerate()
        .find_map(|(ai, acc)| acc.balance_index(address).map(|bi| (ai, bi)))
}

/// Every address owned by any account, in account order.
pub fn all_addresses(accounts: &[Account]) -> Vec<Address> {
    accounts
        .iter()
        .flat_map(|acc| acc.addresses().cloned())
        .collect()
}
