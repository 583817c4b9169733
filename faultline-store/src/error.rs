//! Error types for the record store

use crate::workflow::ReviewStatus;
use thiserror::Error;

/// Result type alias using our StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Record store error type
///
/// Propagation policy: decode failures during bulk load are recovered
/// locally (the record is skipped with a diagnostic); everything here
/// propagates to the caller as a typed result. Nothing is retried
/// internally — after a failed mutation the caller re-reads via
/// `load_all` to learn ground truth.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record is stored under the target id
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A fetched blob cannot be parsed into a record
    ///
    /// Isolated per key during bulk load; fatal for direct single-record
    /// reads (the fetch inside `set_status`).
    #[error("Failed to decode record {id}: {source}")]
    Decode {
        /// Id of the record whose bytes were malformed
        id: String,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The requested status change is not a defined workflow transition
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition {
        /// Status currently stored on the record
        from: ReviewStatus,
        /// Status the caller asked for
        to: ReviewStatus,
    },

    /// JSON serialization error (encode side)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ledger handle failure (transport, signing, storage)
    #[error(transparent)]
    Ledger(#[from] faultline_core::Error),

    /// Payload sealing failure
    #[error(transparent)]
    Crypto(#[from] faultline_crypto::CryptoError),
}

impl StoreError {
    /// Create a not found error for a record id
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound(id.into())
    }

    /// Create a decode error for a record id
    pub fn decode(id: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Decode {
            id: id.into(),
            source,
        }
    }
}
