//! Payload sealing and opening.

use crate::envelope::{ciphertext, Header, HEADER_LEN, NONCE_LEN};
use crate::error::{CryptoError, Result};
use crate::key::KeyProvider;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::prelude::*;
use std::sync::Arc;

/// Seals and opens confidential payload blobs.
///
/// `seal` produces a base64 string safe to embed in JSON (the ledger stores
/// only text-safe fields); `open` is its inverse for holders of the matching
/// key. The record layer treats the blob as opaque: it is carried through
/// reads and status updates without ever being opened there.
pub struct PayloadCipher {
    provider: Arc<dyn KeyProvider>,
}

impl PayloadCipher {
    /// Create a cipher around a key provider.
    pub fn new(provider: impl KeyProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Create a cipher from an already-shared provider.
    pub fn from_provider(provider: Arc<dyn KeyProvider>) -> Self {
        Self { provider }
    }

    /// Seal a plaintext into a text-safe blob.
    ///
    /// Uses the provider's current key and a fresh random nonce; sealing the
    /// same plaintext twice yields different blobs.
    pub fn seal(&self, plaintext: &[u8]) -> Result<String> {
        let key = self.provider.current_key();
        let cipher = Aes256Gcm::new_from_slice(key.expose_secret())
            .map_err(|_| CryptoError::invalid_key("key length mismatch"))?;

        let nonce: [u8; NONCE_LEN] = rand::random();
        let header = Header::new(key.id(), nonce).encode();

        let sealed = cipher
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: plaintext,
                    aad: &header,
                },
            )
            .map_err(|_| CryptoError::seal_failed("AES-GCM encryption error"))?;

        let mut envelope = Vec::with_capacity(HEADER_LEN + sealed.len());
        envelope.extend_from_slice(&header);
        envelope.extend_from_slice(&sealed);

        Ok(BASE64_STANDARD.encode(envelope))
    }

    /// Open a sealed blob back into the plaintext.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat`: not base64, or not a valid envelope
    /// - `UnknownKeyId`: sealed with a key this provider doesn't hold
    /// - `OpenFailed`: wrong key, or the blob was tampered with
    pub fn open(&self, blob: &str) -> Result<Vec<u8>> {
        let envelope = BASE64_STANDARD
            .decode(blob.trim())
            .map_err(|_| CryptoError::invalid_format("blob is not valid base64"))?;

        let header = Header::decode(&envelope)?;
        let key = self
            .provider
            .key_by_id(header.key_id)
            .ok_or_else(|| CryptoError::unknown_key_id(header.key_id))?;

        let cipher = Aes256Gcm::new_from_slice(key.expose_secret())
            .map_err(|_| CryptoError::invalid_key("key length mismatch"))?;

        cipher
            .decrypt(
                Nonce::from_slice(&header.nonce),
                Payload {
                    msg: ciphertext(&envelope),
                    aad: &envelope[..HEADER_LEN],
                },
            )
            .map_err(|_| CryptoError::open_failed("authentication failed (wrong key or tampered)"))
    }
}

impl std::fmt::Debug for PayloadCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadCipher").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{SealingKey, StaticKeyProvider};

    fn cipher_with_key(byte: u8, id: u32) -> PayloadCipher {
        PayloadCipher::new(StaticKeyProvider::new(SealingKey::new([byte; 32], id)))
    }

    #[test]
    fn test_seal_open_roundtrip() {
        let cipher = cipher_with_key(0x42, 1);
        let plaintext = b"aftershock swarm near segment C, depth 11km";

        let blob = cipher.seal(plaintext).unwrap();
        assert_eq!(cipher.open(&blob).unwrap(), plaintext);
    }

    #[test]
    fn test_seal_open_empty_plaintext() {
        let cipher = cipher_with_key(0x42, 1);
        let blob = cipher.seal(b"").unwrap();
        assert_eq!(cipher.open(&blob).unwrap(), b"");
    }

    #[test]
    fn test_sealed_blobs_differ_per_seal() {
        // Fresh nonce per seal: same plaintext, different blobs.
        let cipher = cipher_with_key(0x42, 1);
        let a = cipher.seal(b"same").unwrap();
        let b = cipher.seal(b"same").unwrap();
        assert_ne!(a, b);
        assert_eq!(cipher.open(&a).unwrap(), cipher.open(&b).unwrap());
    }

    #[test]
    fn test_open_rejects_tampering() {
        let cipher = cipher_with_key(0x42, 1);
        let blob = cipher.seal(b"reading").unwrap();

        let mut envelope = BASE64_STANDARD.decode(&blob).unwrap();
        let last = envelope.len() - 1;
        envelope[last] ^= 0x01;
        let tampered = BASE64_STANDARD.encode(envelope);

        let err = cipher.open(&tampered).unwrap_err();
        assert!(matches!(err, CryptoError::OpenFailed { .. }));
    }

    #[test]
    fn test_open_rejects_wrong_key() {
        let sealer = cipher_with_key(0x42, 1);
        let opener = cipher_with_key(0x43, 1);

        let blob = sealer.seal(b"reading").unwrap();
        let err = opener.open(&blob).unwrap_err();
        assert!(matches!(err, CryptoError::OpenFailed { .. }));
    }

    #[test]
    fn test_open_rejects_unknown_key_id() {
        let sealer = cipher_with_key(0x42, 7);
        let opener = cipher_with_key(0x42, 8);

        let blob = sealer.seal(b"reading").unwrap();
        let err = opener.open(&blob).unwrap_err();
        assert!(matches!(err, CryptoError::UnknownKeyId { key_id: 7 }));
    }

    #[test]
    fn test_open_rejects_garbage() {
        let cipher = cipher_with_key(0x42, 1);

        assert!(matches!(
            cipher.open("%%% not base64 %%%").unwrap_err(),
            CryptoError::InvalidFormat { .. }
        ));
        // Valid base64 of non-envelope bytes
        assert!(matches!(
            cipher
                .open(&BASE64_STANDARD.encode(b"plain old text"))
                .unwrap_err(),
            CryptoError::InvalidFormat { .. }
        ));
    }
}
