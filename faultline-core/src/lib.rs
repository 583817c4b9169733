//! Core ledger abstractions for the faultline record layer
//!
//! This crate defines the seam between the record-lifecycle logic and the
//! external key/value ledger. The ledger itself (contract transport, signing,
//! wallet plumbing) is an external collaborator; this crate only fixes the
//! contract it must satisfy:
//!
//! - [`LedgerRead`]: read-only handle (queries + liveness probe)
//! - [`LedgerWrite`]: signing handle (queries + mutations)
//!
//! The traits are runtime-agnostic and use `async_trait` for async support.
//! Read-only clients hold a `LedgerRead`; anything that mutates the ledger
//! requires a `LedgerWrite` bound, so the read/write capability split is
//! enforced at the type level rather than at runtime.
//!
//! [`MemoryLedger`] is an in-memory implementation for tests and local
//! development.

mod error;
mod ledger;

pub use error::{Error, Result};
pub use ledger::{LedgerRead, LedgerWrite, MemoryLedger};
