//! Key index: the set of all record ids, stored as one ledger entry
//!
//! The index is a single JSON array under a well-known key, append-only
//! from a correct client's perspective. Appends are read-modify-write with
//! no compare-and-swap, so two clients appending concurrently can race and
//! one append can be lost. That is an accepted limitation of the current
//! layout; the principled fix is one ledger entry per id with the index
//! reconstructed by range scan, which is out of scope here.

use faultline_core::{LedgerRead, LedgerWrite, Result};

/// Handle to the record id index stored under a fixed ledger key.
#[derive(Debug, Clone)]
pub struct KeyIndex {
    key: String,
}

impl KeyIndex {
    /// Create an index handle for the given ledger key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The ledger key this index lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the current ordered id list.
    ///
    /// An absent index reads as empty. Corrupt index bytes are logged and
    /// also treated as empty rather than aborting the whole sync; transport
    /// failures still propagate.
    pub async fn load<L: LedgerRead + ?Sized>(&self, ledger: &L) -> Result<Vec<String>> {
        let bytes = ledger.get(&self.key).await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_slice(&bytes) {
            Ok(keys) => Ok(keys),
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "Corrupt key index, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append `id` to the index if not already present, writing the merged
    /// list back as a single put.
    ///
    /// Idempotent: appending the same id twice leaves it in the index
    /// exactly once. Returns the list as written (or as found, when the id
    /// was already present and no write was needed).
    ///
    /// Read-modify-write with no CAS: a concurrent append from another
    /// client between our read and our put is overwritten and lost.
    pub async fn append<L: LedgerWrite + ?Sized>(
        &self,
        ledger: &L,
        id: &str,
    ) -> Result<Vec<String>> {
        let mut keys = self.load(ledger).await?;
        if keys.iter().any(|k| k == id) {
            return Ok(keys);
        }
        keys.push(id.to_string());
        ledger.put(&self.key, &serde_json::to_vec(&keys)?).await?;
        Ok(keys)
    }
}
