//! Sealing key types and key provider traits.
//!
//! - [`SealingKey`]: a 32-byte AES-256 key, zeroized on drop
//! - [`KeyProvider`]: key lookup trait (supports rotation)
//! - [`StaticKeyProvider`]: single-key implementation

use crate::envelope::KEY_LEN;
use crate::error::{CryptoError, Result};
use base64::prelude::*;
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte AES-256 sealing key with automatic zeroization.
///
/// Key material is zeroized on drop and redacted from `Debug` output. Call
/// [`expose_secret`](Self::expose_secret) only when handing the bytes to a
/// crypto primitive; never store, log, or transmit them.
pub struct SealingKey {
    /// The secret key bytes, zeroized on drop.
    bytes: KeyBytes,
    /// Key identifier for rotation support.
    id: u32,
}

/// Fixed-size array for the key, with zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeyBytes([u8; KEY_LEN]);

// Redacted Debug so key material never reaches logs.
impl std::fmt::Debug for SealingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealingKey")
            .field("id", &self.id)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl SealingKey {
    /// Create a sealing key from raw bytes.
    ///
    /// `id` is the key identifier; use 0 if not rotating keys.
    pub fn new(bytes: [u8; KEY_LEN], id: u32) -> Self {
        Self {
            bytes: KeyBytes(bytes),
            id,
        }
    }

    /// Create a sealing key from a base64-encoded string (standard or
    /// URL-safe alphabet).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` if decoding fails or the decoded
    /// material is not exactly 32 bytes.
    pub fn from_base64(encoded: &str, id: u32) -> Result<Self> {
        let mut decoded = BASE64_STANDARD
            .decode(encoded.trim())
            .or_else(|_| BASE64_URL_SAFE.decode(encoded.trim()))
            .map_err(|_| CryptoError::invalid_key("invalid base64 encoding"))?;

        if decoded.len() != KEY_LEN {
            decoded.zeroize();
            return Err(CryptoError::invalid_key(
                "key must be exactly 32 bytes when decoded",
            ));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&decoded);
        decoded.zeroize();

        Ok(Self::new(bytes, id))
    }

    /// Get the key identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Expose the secret key bytes for cryptographic operations.
    pub(crate) fn expose_secret(&self) -> &[u8; KEY_LEN] {
        &self.bytes.0
    }
}

// Intentionally no Clone impl to prevent accidental copies of key material.

/// Trait for providing sealing keys.
///
/// Supports rotation: [`current_key`](Self::current_key) returns the active
/// key for new seals, while [`key_by_id`](Self::key_by_id) looks up older
/// keys so previously-sealed payloads stay readable.
///
/// Implementations must be `Send + Sync`; custom implementations can load
/// keys from KMS, HSM, or configuration services. Who holds a provider
/// holds decode capability for the confidential payload.
pub trait KeyProvider: Send + Sync {
    /// Get the current key to use for new seals.
    fn current_key(&self) -> Arc<SealingKey>;

    /// Look up a key by its ID for opening.
    ///
    /// Returns `None` for unknown IDs (rotated-out key, wrong provider, or
    /// a corrupted envelope header).
    fn key_by_id(&self, id: u32) -> Option<Arc<SealingKey>>;
}

/// A key provider with a single static key.
///
/// The common case for deployments that don't rotate keys.
pub struct StaticKeyProvider {
    key: Arc<SealingKey>,
}

impl StaticKeyProvider {
    /// Create a provider around one key.
    pub fn new(key: SealingKey) -> Self {
        Self { key: Arc::new(key) }
    }

    /// Create from a base64-encoded key string (key ID 0).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` on bad base64 or wrong length.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let key = SealingKey::from_base64(encoded, 0)?;
        Ok(Self::new(key))
    }
}

impl KeyProvider for StaticKeyProvider {
    fn current_key(&self) -> Arc<SealingKey> {
        Arc::clone(&self.key)
    }

    fn key_by_id(&self, id: u32) -> Option<Arc<SealingKey>> {
        if id == self.key.id() {
            Some(Arc::clone(&self.key))
        } else {
            None
        }
    }
}

// Intentionally no Debug impl on providers to prevent accidental exposure.

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: [u8; 32] = [0x6b; 32];

    #[test]
    fn test_key_creation() {
        let key = SealingKey::new(TEST_KEY, 7);
        assert_eq!(key.id(), 7);
        assert_eq!(key.expose_secret(), &TEST_KEY);
    }

    #[test]
    fn test_key_from_base64() {
        // Base64 of 32 zero bytes
        let encoded = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
        let key = SealingKey::from_base64(encoded, 0).unwrap();
        assert_eq!(key.expose_secret(), &[0u8; 32]);
    }

    #[test]
    fn test_key_from_base64_wrong_length() {
        let err = SealingKey::from_base64("AQID", 0).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKey { .. }));
    }

    #[test]
    fn test_key_from_base64_invalid() {
        let err = SealingKey::from_base64("not valid base64!!!", 0).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKey { .. }));
    }

    #[test]
    fn test_key_debug_redacted() {
        let key = SealingKey::new(TEST_KEY, 7);
        let rendered = format!("{:?}", key);
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("107")); // 0x6b
    }

    #[test]
    fn test_static_provider_lookup() {
        let provider = StaticKeyProvider::new(SealingKey::new(TEST_KEY, 42));

        assert_eq!(provider.current_key().id(), 42);
        assert!(provider.key_by_id(42).is_some());
        assert!(provider.key_by_id(999).is_none());
    }
}
