//! Payload confidentiality for fault-line readings using AES-256-GCM.
//!
//! The ledger stores each reading's sensitive notes as an opaque, text-safe
//! blob next to a handful of searchable plaintext fields. This crate is the
//! sealing step that produces that blob:
//!
//! - **AES-256-GCM authenticated encryption**: confidentiality plus
//!   integrity; a tampered blob fails to open
//! - **Portable blob format**: base64 of a self-describing binary envelope,
//!   safe to embed in the ledger's JSON values
//! - **Key rotation support**: the envelope carries a key ID so old blobs
//!   stay readable after rotation
//! - **Secure key handling**: key material is zeroized on drop via `zeroize`
//!
//! # Quick start
//!
//! ```ignore
//! use faultline_crypto::{PayloadCipher, SealingKey, StaticKeyProvider};
//!
//! let key = SealingKey::from_base64(&std::env::var("FAULTLINE_SEALING_KEY")?, 0)?;
//! let cipher = PayloadCipher::new(StaticKeyProvider::new(key));
//!
//! let blob = cipher.seal(b"station operator notes")?;
//! let notes = cipher.open(&blob)?;
//! ```
//!
//! # Who can open a blob
//!
//! Decode capability is exactly key possession: any party holding a
//! [`KeyProvider`] that knows the sealing key can open the payload, nobody
//! else can. Wiring that provider to a KMS/HSM is an integration concern
//! outside this crate.

mod cipher;
mod envelope;
mod error;
mod key;

pub use cipher::PayloadCipher;
pub use error::{CryptoError, Result};
pub use key::{KeyProvider, SealingKey, StaticKeyProvider};

// Envelope constants for advanced use cases (format inspection, test vectors)
pub use envelope::{
    Header, ALG_AES256_GCM, HEADER_LEN, KEY_LEN, MAGIC, MIN_ENVELOPE_LEN, NONCE_LEN, TAG_LEN,
    VERSION,
};
