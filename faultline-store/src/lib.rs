//! Record lifecycle and ledger synchronization for fault-line readings
//!
//! Field stations submit sensitive seismic readings to a shared key/value
//! ledger; reviewers move each reading through a three-state workflow; any
//! client reconstructs the current record set by reading the ledger back.
//! This crate is that synchronization and lifecycle layer:
//!
//! - [`RecordStore`] — the sync engine: `load_all`, `create`, `set_status`
//! - [`KeyIndex`] — the record id index, one JSON array under a well-known
//!   ledger key with idempotent read-modify-write append
//! - [`Record`] / [`encode_record`] / [`decode_record`] — the record model
//!   and its persisted JSON codec
//! - [`ReviewStatus`] — the pending/verified/rejected state machine,
//!   enforced by the store on every status mutation
//! - [`report`] — pure snapshot helpers (statistics, search) for the view
//!   layer
//!
//! The ledger transport and the payload confidentiality scheme live behind
//! the `faultline-core` handle traits and `faultline-crypto` respectively.
//!
//! # Example
//!
//! ```ignore
//! use faultline_core::MemoryLedger;
//! use faultline_crypto::{PayloadCipher, SealingKey, StaticKeyProvider};
//! use faultline_store::{NewReading, RecordStore};
//!
//! let cipher = PayloadCipher::new(StaticKeyProvider::new(SealingKey::new(key, 0)));
//! let store = RecordStore::new(MemoryLedger::new(), cipher);
//!
//! let id = store.create(NewReading {
//!     station_id: "ST-7".into(),
//!     coordinates: "34.05,-118.24".into(),
//!     magnitude: 4.2,
//!     notes: "shallow swarm, sensor 3 saturated".into(),
//! }).await?;
//!
//! store.verify(&id).await?;
//! let records = store.load_all().await?;
//! ```

mod config;
mod error;
mod index;
mod record;
pub mod report;
mod store;
mod workflow;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use index::KeyIndex;
pub use record::{decode_record, encode_record, NewReading, Record};
pub use store::RecordStore;
pub use workflow::ReviewStatus;
