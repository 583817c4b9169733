//! Ledger handle traits and the in-memory test implementation
//!
//! The external ledger is an opaque `key -> bytes` store. Two capability
//! levels exist:
//!
//! - [`LedgerRead`]: queries only, available without an authenticated
//!   identity (read-only handle)
//! - [`LedgerWrite`]: queries plus mutations, requires a signing identity
//!
//! Absence is signalled by **empty bytes**, matching the upstream contract:
//! `get` on a key that was never written returns `Ok(vec![])`, not an error.
//! Any non-empty result is either decodable by the caller or must be
//! reported as corrupt by the caller.

use crate::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only ledger operations
///
/// Implementations wrap the external store's query surface. All methods may
/// suspend the calling flow; none of them retry internally.
#[async_trait]
pub trait LedgerRead: Debug + Send + Sync {
    /// Read the raw bytes stored under `key`.
    ///
    /// Returns an empty vector when no value has ever been written under
    /// `key` (absence), per the upstream store contract. Transport failures
    /// surface as [`Error::Transport`](crate::Error::Transport).
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Liveness probe for the backing store.
    ///
    /// Exposed for the view layer; the record store does not consult it
    /// internally.
    async fn is_available(&self) -> Result<bool>;
}

/// Mutating ledger operations (signing handle)
///
/// Extends [`LedgerRead`]: every signing handle can also query.
#[async_trait]
pub trait LedgerWrite: LedgerRead {
    /// Write `bytes` under `key`, overwriting any existing value.
    ///
    /// Success means the write is durable per the external store's own
    /// guarantees. A caller that abandons the returned future must not
    /// assume the write had no effect; it may still complete out-of-band.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// A simple in-memory ledger for testing
///
/// Stores data in a `HashMap` behind `Arc<RwLock>` for interior mutability,
/// making it cheap to clone and share across tasks. The availability flag
/// can be toggled to exercise the view layer's unavailable path.
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// Create a new empty in-memory ledger (available by default)
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Insert raw bytes directly, bypassing the async surface.
    ///
    /// Test helper for seeding state (including deliberately corrupt bytes).
    pub fn insert(&self, key: impl Into<String>, bytes: Vec<u8>) {
        self.data.write().insert(key.into(), bytes);
    }

    /// Insert a JSON-serialized value directly.
    pub fn insert_json<T: serde::Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.insert(key, bytes);
        Ok(())
    }

    /// Toggle the liveness probe result.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the ledger holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl LedgerRead for MemoryLedger {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        // Absent keys read as empty bytes, matching the external contract.
        Ok(self.data.read().get(key).cloned().unwrap_or_default())
    }

    async fn is_available(&self) -> Result<bool> {
        Ok(self.available.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl LedgerWrite for MemoryLedger {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.data.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_ledger_roundtrip() {
        let ledger = MemoryLedger::new();
        ledger.put("station/1", b"hello world").await.unwrap();

        let bytes = ledger.get("station/1").await.unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[tokio::test]
    async fn test_memory_ledger_absent_reads_empty() {
        let ledger = MemoryLedger::new();
        let bytes = ledger.get("never-written").await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_memory_ledger_overwrite() {
        let ledger = MemoryLedger::new();
        ledger.put("k", b"first").await.unwrap();
        ledger.put("k", b"second").await.unwrap();
        assert_eq!(ledger.get("k").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_memory_ledger_availability_toggle() {
        let ledger = MemoryLedger::new();
        assert!(ledger.is_available().await.unwrap());

        ledger.set_available(false);
        assert!(!ledger.is_available().await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_ledger_insert_json() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Probe {
            name: String,
            depth: i32,
        }

        let ledger = MemoryLedger::new();
        let probe = Probe {
            name: "p1".to_string(),
            depth: 40,
        };
        ledger.insert_json("probe", &probe).unwrap();

        let bytes = ledger.get("probe").await.unwrap();
        let parsed: Probe = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, probe);
    }

    #[tokio::test]
    async fn test_memory_ledger_clone_shares_state() {
        let ledger = MemoryLedger::new();
        let other = ledger.clone();
        other.put("shared", b"x").await.unwrap();
        assert_eq!(ledger.get("shared").await.unwrap(), b"x");
    }
}
