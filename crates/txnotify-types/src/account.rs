use serde::{Deserialize, Serialize};

use crate::hash::Address;

/// One address owned by an account, with its tracked funds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The address this balance belongs to.
    pub address: Address,
    /// Confirmed funds on the address.
    pub value: i64,
    /// Pending change expected to return to this address. Cleared when a
    /// confirmed transaction lands on the address.
    pub change: i64,
}

impl Balance {
    /// Create a balance entry with no funds and no pending change.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            value: 0,
            change: 0,
        }
    }
}

/// A named wallet account holding one balance entry per owned address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account name, unique within the wallet.
    pub name: String,
    /// Balance entries, one per owned address.
    pub balances: Vec<Balance>,
}

impl Account {
    /// Create an empty account.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balances: Vec::new(),
        }
    }

    /// Index of the balance entry for `address`, if this account owns it.
    pub fn balance_index(&self, address: &Address) -> Option<usize> {
        self.balances.iter().position(|b| &b.address == address)
    }

    /// Iterate over the addresses this account owns.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.balances.iter().map(|b| &b.address)
    }
}
