use serde::{Deserialize, Serialize};

use crate::hash::{Address, BundleHash};

/// The slice of a ledger transaction this system cares about, as fetched
/// from the ledger query API for a known transaction hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    /// Destination address of the transaction.
    pub address: Address,
    /// Transferred amount. Zero-value transactions carry no funds
    /// (signature or approval transactions) and never trigger balance
    /// updates or notifications.
    pub value: i64,
    /// The bundle this transaction belongs to.
    pub bundle: BundleHash,
}

impl TxRecord {
    /// Returns `true` if the transaction moves funds.
    pub fn has_value(&self) -> bool {
        self.value != 0
    }
}
