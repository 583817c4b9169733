//! Error types for payload sealing operations.
//!
//! Error messages intentionally avoid including sensitive data such as key
//! material or plaintext content.

use thiserror::Error;

/// Result type alias for sealing operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur while sealing or opening a payload blob.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The blob is not a valid sealed envelope.
    ///
    /// Raised when the base64 text doesn't decode, the envelope is too
    /// short, the magic bytes don't match, or the version/algorithm byte is
    /// unsupported.
    #[error("Invalid sealed payload: {context}")]
    InvalidFormat {
        /// Description of what was wrong with the blob.
        context: &'static str,
    },

    /// The key ID in the envelope doesn't match any known key.
    ///
    /// Typically means the payload was sealed with a rotated-out key, or the
    /// wrong key provider is configured.
    #[error("Unknown sealing key ID: {key_id}")]
    UnknownKeyId {
        /// The key ID found in the envelope header.
        key_id: u32,
    },

    /// Sealing failed.
    ///
    /// Rare with AES-GCM; usually indicates a programming error.
    #[error("Seal failed: {context}")]
    SealFailed {
        /// Description of what went wrong.
        context: &'static str,
    },

    /// Opening failed: wrong key, or the blob was tampered with or
    /// corrupted (authentication tag mismatch).
    #[error("Open failed: {context}")]
    OpenFailed {
        /// Description of what went wrong.
        context: &'static str,
    },

    /// Invalid key material (wrong length, bad base64).
    #[error("Invalid key: {context}")]
    InvalidKey {
        /// Description of what was wrong with the key.
        context: &'static str,
    },
}

impl CryptoError {
    /// Create an invalid format error.
    pub fn invalid_format(context: &'static str) -> Self {
        Self::InvalidFormat { context }
    }

    /// Create an unknown key ID error.
    pub fn unknown_key_id(key_id: u32) -> Self {
        Self::UnknownKeyId { key_id }
    }

    /// Create a seal failed error.
    pub fn seal_failed(context: &'static str) -> Self {
        Self::SealFailed { context }
    }

    /// Create an open failed error.
    pub fn open_failed(context: &'static str) -> Self {
        Self::OpenFailed { context }
    }

    /// Create an invalid key error.
    pub fn invalid_key(context: &'static str) -> Self {
        Self::InvalidKey { context }
    }
}
