//! Binary envelope format for sealed payloads.
//!
//! Layout (before base64 text encoding):
//!
//! ```text
//! | magic (4) | version (1) | alg (1) | key id (4, BE) | nonce (12) | ciphertext + tag |
//! ```
//!
//! The 22-byte header doubles as the AAD for AES-GCM, so any change to the
//! header fields fails authentication when the payload is opened.

use crate::error::{CryptoError, Result};

/// Magic bytes identifying a faultline sealed payload.
pub const MAGIC: &[u8; 4] = b"FLSE";

/// Current envelope format version.
pub const VERSION: u8 = 0x01;

/// Algorithm ID for AES-256-GCM.
pub const ALG_AES256_GCM: u8 = 0x01;

/// Size of the AES-GCM nonce.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Required key size for AES-256.
pub const KEY_LEN: usize = 32;

/// Total header length (magic + version + alg + key id + nonce).
pub const HEADER_LEN: usize = 4 + 1 + 1 + 4 + NONCE_LEN;

/// Minimum valid envelope size (header plus auth tag, empty plaintext).
pub const MIN_ENVELOPE_LEN: usize = HEADER_LEN + TAG_LEN;

/// Parsed envelope header.
///
/// Built for sealing and recovered during opening; the encoded form is also
/// the AAD in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// ID of the key the payload was sealed with.
    pub key_id: u32,
    /// Per-seal random nonce.
    pub nonce: [u8; NONCE_LEN],
}

impl Header {
    /// Create a header for a new seal.
    pub fn new(key_id: u32, nonce: [u8; NONCE_LEN]) -> Self {
        Self { key_id, nonce }
    }

    /// Encode the header into its wire form.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(MAGIC);
        out[4] = VERSION;
        out[5] = ALG_AES256_GCM;
        out[6..10].copy_from_slice(&self.key_id.to_be_bytes());
        out[10..].copy_from_slice(&self.nonce);
        out
    }

    /// Parse and validate the header of a sealed envelope.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidFormat` when the envelope is too short,
    /// the magic bytes don't match, or the version/algorithm byte is
    /// unsupported.
    pub fn decode(envelope: &[u8]) -> Result<Self> {
        if envelope.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::invalid_format(
                "envelope too short to be a sealed payload",
            ));
        }
        if &envelope[0..4] != MAGIC {
            return Err(CryptoError::invalid_format(
                "not a faultline sealed payload (magic mismatch)",
            ));
        }
        if envelope[4] != VERSION {
            return Err(CryptoError::invalid_format("unsupported envelope version"));
        }
        if envelope[5] != ALG_AES256_GCM {
            return Err(CryptoError::invalid_format("unsupported sealing algorithm"));
        }

        let key_id = u32::from_be_bytes(
            envelope[6..10]
                .try_into()
                .expect("slice length verified above"),
        );
        let nonce: [u8; NONCE_LEN] = envelope[10..HEADER_LEN]
            .try_into()
            .expect("slice length verified above");

        Ok(Self { key_id, nonce })
    }
}

/// The ciphertext portion of an envelope (everything after the header).
///
/// Callers must validate with [`Header::decode`] first; the length check
/// there guarantees this slice is in bounds.
pub fn ciphertext(envelope: &[u8]) -> &[u8] {
    &envelope[HEADER_LEN..]
}
