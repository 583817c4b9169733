//! Record model and wire codec
//!
//! A [`Record`] is one fault-line observation. Its confidential payload is
//! an opaque sealed blob (see `faultline-crypto`); the remaining fields are
//! deliberately plaintext so clients can search and aggregate without
//! decode capability. Keeping `magnitude` outside the sealed payload is a
//! policy choice inherited from the source system, not a necessity.
//!
//! The persisted form is a JSON object with the historical camelCase field
//! names:
//!
//! ```json
//! { "data": "...", "timestamp": 1718000000, "stationId": "ST-7",
//!   "coordinates": "34.05,-118.24", "magnitude": 4.2, "status": "pending" }
//! ```
//!
//! [`encode_record`] and [`decode_record`] are pure functions; decoding
//! fails explicitly on malformed bytes rather than silently dropping the
//! record.

use crate::error::{Result, StoreError};
use crate::workflow::ReviewStatus;
use serde::{Deserialize, Serialize};

/// One fault-line observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Opaque unique key, generated client-side at creation, immutable
    pub id: String,
    /// Sealed confidential blob (never opened by this layer)
    pub payload: String,
    /// Seconds since epoch, set once at creation, immutable
    pub created_at: i64,
    /// Plaintext searchable identifier of the originating station
    pub station_id: String,
    /// Plaintext searchable location string
    pub coordinates: String,
    /// Plaintext seismic magnitude
    pub magnitude: f64,
    /// Review workflow status
    pub status: ReviewStatus,
}

/// Fields supplied by a station operator when submitting a reading.
///
/// `notes` is the sensitive part; the store seals it into the record's
/// payload blob before anything touches the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    /// Identifier of the submitting station
    pub station_id: String,
    /// Location string (free-form, searchable)
    pub coordinates: String,
    /// Seismic magnitude
    pub magnitude: f64,
    /// Confidential operator notes / raw reading
    pub notes: String,
}

/// Persisted JSON shape of a record.
///
/// The record id is not part of the stored object; it lives in the ledger
/// key and in the key index.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    data: String,
    timestamp: i64,
    #[serde(rename = "stationId")]
    station_id: String,
    coordinates: String,
    magnitude: f64,
    // Records persisted before the workflow existed carry no status.
    #[serde(default)]
    status: ReviewStatus,
}

/// Serialize a record into its persisted byte form.
pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    let stored = StoredRecord {
        data: record.payload.clone(),
        timestamp: record.created_at,
        station_id: record.station_id.clone(),
        coordinates: record.coordinates.clone(),
        magnitude: record.magnitude,
        status: record.status,
    };
    Ok(serde_json::to_vec(&stored)?)
}

/// Parse persisted bytes back into a record.
///
/// `id` is the record id the bytes were fetched under. Fails with
/// [`StoreError::Decode`] on malformed bytes.
pub fn decode_record(id: &str, bytes: &[u8]) -> Result<Record> {
    let stored: StoredRecord =
        serde_json::from_slice(bytes).map_err(|e| StoreError::decode(id, e))?;
    Ok(Record {
        id: id.to_string(),
        payload: stored.data,
        created_at: stored.timestamp,
        station_id: stored.station_id,
        coordinates: stored.coordinates,
        magnitude: stored.magnitude,
        status: stored.status,
    })
}
