//! Record store: the ledger synchronization and lifecycle engine
//!
//! [`RecordStore`] reconstructs the current record set from the ledger
//! (`load_all`), submits new readings (`create`), and drives the review
//! workflow (`set_status`). Read-only callers instantiate it over any
//! [`LedgerRead`]; mutations additionally require the handle to implement
//! [`LedgerWrite`] (a signing identity), so the capability split is checked
//! at compile time.
//!
//! Concurrency model: one logical flow per client, no internal locking over
//! the shared ledger. The store accepts last-writer-wins semantics for
//! concurrent status updates and the documented lost-append window on the
//! key index; nothing is retried internally.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::index::KeyIndex;
use crate::record::{decode_record, encode_record, NewReading, Record};
use crate::workflow::ReviewStatus;
use chrono::Utc;
use faultline_core::{LedgerRead, LedgerWrite};
use faultline_crypto::PayloadCipher;
use std::cmp::Reverse;
use std::sync::Arc;

/// Sync engine over a ledger handle.
///
/// Cheap to clone when the handle is; clones share the payload cipher.
#[derive(Debug, Clone)]
pub struct RecordStore<L> {
    ledger: L,
    cipher: Arc<PayloadCipher>,
    config: StoreConfig,
    index: KeyIndex,
}

impl<L: LedgerRead> RecordStore<L> {
    /// Create a store with the default key namespace.
    pub fn new(ledger: L, cipher: PayloadCipher) -> Self {
        Self::with_config(ledger, cipher, StoreConfig::default())
    }

    /// Create a store with an explicit key namespace.
    pub fn with_config(ledger: L, cipher: PayloadCipher, config: StoreConfig) -> Self {
        let index = KeyIndex::new(config.index_key.clone());
        Self {
            ledger,
            cipher: Arc::new(cipher),
            config,
            index,
        }
    }

    /// The key namespace this store operates in.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Liveness probe, passed through to the ledger handle for the view
    /// layer.
    pub async fn is_available(&self) -> Result<bool> {
        Ok(self.ledger.is_available().await?)
    }

    /// Load the full record set, newest first.
    ///
    /// Loads the key index, then fetches every record concurrently. A
    /// single key's fetch or decode failure is isolated: the record is
    /// skipped with a warning so one corrupt entry never blocks the rest of
    /// the set. Ordering is total by `created_at` descending; ties keep
    /// their original index order (stable sort).
    pub async fn load_all(&self) -> Result<Vec<Record>> {
        let keys = self.index.load(&self.ledger).await?;

        let fetches: Vec<_> = keys.iter().map(|id| self.fetch_one(id)).collect();
        let results = futures::future::join_all(fetches).await;

        let mut records = Vec::with_capacity(keys.len());
        for (id, result) in keys.iter().zip(results) {
            match result {
                Ok(Some(record)) => records.push(record),
                // Orphaned index entry: indexed before/without its record.
                Ok(None) => tracing::warn!(id, "Indexed record missing from ledger, skipping"),
                Err(error) => tracing::warn!(id, %error, "Skipping unreadable record"),
            }
        }

        records.sort_by_key(|r| Reverse(r.created_at));
        Ok(records)
    }

    /// Fetch and decode one record; `None` when nothing is stored under
    /// its key.
    async fn fetch_one(&self, id: &str) -> Result<Option<Record>> {
        let bytes = self.ledger.get(&self.config.record_key(id)).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        decode_record(id, &bytes).map(Some)
    }
}

impl<L: LedgerWrite> RecordStore<L> {
    /// Submit a new reading. Returns the generated record id.
    ///
    /// Seals the confidential notes into the payload blob, writes the
    /// record with `status = pending`, then appends the id to the key
    /// index. These are two sequential writes: a crash in between leaves an
    /// orphan record that is not yet indexed, which self-heals only if the
    /// caller retries. On any failure no local state is assumed; re-read
    /// via [`load_all`](Self::load_all) to learn ground truth.
    pub async fn create(&self, reading: NewReading) -> Result<String> {
        let id = generate_id();
        let payload = self.cipher.seal(reading.notes.as_bytes())?;

        let record = Record {
            id: id.clone(),
            payload,
            created_at: Utc::now().timestamp(),
            station_id: reading.station_id,
            coordinates: reading.coordinates,
            magnitude: reading.magnitude,
            status: ReviewStatus::Pending,
        };

        self.ledger
            .put(&self.config.record_key(&id), &encode_record(&record)?)
            .await?;
        self.index.append(&self.ledger, &id).await?;

        Ok(id)
    }

    /// Move a record to a new review status. Returns the updated record.
    ///
    /// Fetch-check-then-write: the current record is read back and the
    /// transition validated against the workflow table before the overwrite,
    /// so an illegal request fails with
    /// [`StoreError::IllegalTransition`] instead of silently rewriting a
    /// terminal record. All fields other than `status` are carried through
    /// unchanged and the key index is not touched.
    ///
    /// The final write is still a blind overwrite: a status change made by
    /// another client between our read and our put is lost
    /// (last-writer-wins, accepted at low contention).
    pub async fn set_status(&self, id: &str, new_status: ReviewStatus) -> Result<Record> {
        let key = self.config.record_key(id);

        let bytes = self.ledger.get(&key).await?;
        if bytes.is_empty() {
            return Err(StoreError::not_found(id));
        }
        // Decode failure is fatal here, unlike the bulk-load path.
        let current = decode_record(id, &bytes)?;

        if !current.status.can_transition_to(new_status) {
            return Err(StoreError::IllegalTransition {
                from: current.status,
                to: new_status,
            });
        }

        let updated = Record {
            status: new_status,
            ..current
        };
        self.ledger.put(&key, &encode_record(&updated)?).await?;

        Ok(updated)
    }

    /// Convenience: `pending -> verified`.
    pub async fn verify(&self, id: &str) -> Result<Record> {
        self.set_status(id, ReviewStatus::Verified).await
    }

    /// Convenience: `pending -> rejected`.
    pub async fn reject(&self, id: &str) -> Result<Record> {
        self.set_status(id, ReviewStatus::Rejected).await
    }
}

/// Generate a fresh record id from a millisecond timestamp plus random
/// entropy.
///
/// Best-effort statistical uniqueness without coordination; true guarantees
/// would need server-assigned sequence numbers or larger random identifiers.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let entropy: u32 = rand::random();
    format!("{millis}-{entropy:08x}")
}
