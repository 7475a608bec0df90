use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length in trytes of transaction hashes, bundle hashes, and addresses.
pub const HASH_TRYTES: usize = 81;

/// Validate that `s` is a tryte string of exactly `expected` characters.
///
/// The tryte alphabet is `9` plus `A-Z`. Anything else is rejected at
/// construction so the rest of the system can treat identifiers as opaque.
fn check_trytes(s: &str, expected: usize) -> Result<(), TypeError> {
    if s.len() != expected {
        return Err(TypeError::InvalidLength {
            expected,
            actual: s.len(),
        });
    }
    for (position, ch) in s.chars().enumerate() {
        if ch != '9' && !ch.is_ascii_uppercase() {
            return Err(TypeError::InvalidTryte { ch, position });
        }
    }
    Ok(())
}

/// Identifier of a single ledger transaction.
///
/// An 81-tryte string as reported by the ledger query API. Identical
/// transactions always carry the same hash, so `TxHash` is usable as a set
/// and map key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    /// Parse and validate a tryte string.
    pub fn from_trytes(s: &str) -> Result<Self, TypeError> {
        check_trytes(s, HASH_TRYTES)?;
        Ok(Self(s.to_string()))
    }

    /// The underlying tryte string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 trytes).
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", self.short())
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a bundle, the grouping that links the transactions of one
/// logical transfer. Notifications are issued per bundle, not per
/// transaction.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BundleHash(String);

impl BundleHash {
    /// Parse and validate a tryte string.
    pub fn from_trytes(s: &str) -> Result<Self, TypeError> {
        check_trytes(s, HASH_TRYTES)?;
        Ok(Self(s.to_string()))
    }

    /// The underlying tryte string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 trytes).
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Debug for BundleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BundleHash({})", self.short())
    }
}

impl fmt::Display for BundleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet address in its 81-tryte core form (no checksum trytes).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Parse and validate a tryte string.
    pub fn from_trytes(s: &str) -> Result<Self, TypeError> {
        check_trytes(s, HASH_TRYTES)?;
        Ok(Self(s.to_string()))
    }

    /// The underlying tryte string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 trytes).
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
