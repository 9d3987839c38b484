//! Chunk encryption: AES-256-GCM with the `nonce || ciphertext` envelope.
//!
//! The envelope layout is the inter-system contract with the browser client:
//! a fresh 12-byte random nonce is prepended to the ciphertext (which carries
//! the authentication tag), with no length prefix. The nonce size is a fixed
//! constant known to both sides.

use crate::AppError;
use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose, Engine as _};

/// AES-256 key size in bytes.
pub const KEY_LEN: usize = 32;
/// GCM nonce size in bytes; the client splits the envelope at this offset.
pub const NONCE_LEN: usize = 12;

/// Decode a caller-supplied base64 key, rejecting anything that is not exactly
/// 32 raw bytes. This runs before any cipher construction or network call.
pub fn decode_key_base64(key_base64: &str) -> Result<Vec<u8>, AppError> {
    let key = general_purpose::STANDARD
        .decode(key_base64)
        .map_err(|_| AppError::InvalidInput("Invalid key".to_string()))?;
    if key.len() != KEY_LEN {
        return Err(AppError::InvalidInput("Invalid key".to_string()));
    }
    Ok(key)
}

/// Per-request chunk cipher. Uses AES-256-GCM for authenticated encryption;
/// no associated data is bound in.
#[derive(Clone)]
pub struct ChunkCipher {
    cipher: Aes256Gcm,
}

impl ChunkCipher {
    /// Create a cipher from raw 32-byte key material.
    pub fn from_key_bytes(key_bytes: &[u8]) -> Result<Self, AppError> {
        if key_bytes.len() != KEY_LEN {
            return Err(AppError::InvalidInput("Invalid key".to_string()));
        }
        let key = Key::<Aes256Gcm>::from_slice(key_bytes);
        Ok(Self {
            cipher: Aes256Gcm::new(key),
        })
    }

    /// Create a cipher from the `keyBase64` form field.
    pub fn from_key_base64(key_base64: &str) -> Result<Self, AppError> {
        let key_bytes = decode_key_base64(key_base64)?;
        Self::from_key_bytes(&key_bytes)
    }

    /// Encrypt a chunk under a freshly generated random nonce.
    ///
    /// Returns the envelope `nonce || ciphertext`. The nonce comes from the
    /// OS CSPRNG on every call; reusing one under the same key would void the
    /// authentication guarantee.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, AppError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| AppError::Internal(format!("Encryption failed: {}", e)))?;

        let mut envelope = nonce.to_vec();
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    /// Decrypt an envelope produced by [`seal`](Self::seal).
    ///
    /// The server never calls this on the request path (decryption is the
    /// client's job); it exists so the envelope contract is testable in-crate.
    pub fn open(&self, envelope: &[u8]) -> Result<Vec<u8>, AppError> {
        if envelope.len() < NONCE_LEN {
            return Err(AppError::InvalidInput(
                "Encrypted data too short".to_string(),
            ));
        }

        let nonce = Nonce::from_slice(&envelope[..NONCE_LEN]);
        let ciphertext = &envelope[NONCE_LEN..];

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| AppError::InvalidInput(format!("Decryption failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &[u8; 32] = b"01234567890123456789012345678901";

    fn test_cipher() -> ChunkCipher {
        ChunkCipher::from_key_bytes(TEST_KEY).unwrap()
    }

    #[test]
    fn seal_open_roundtrip() {
        let cipher = test_cipher();
        let plaintext = b"chunk payload bytes";

        let envelope = cipher.seal(plaintext).unwrap();
        assert_ne!(&envelope[NONCE_LEN..], plaintext.as_slice());

        let decrypted = cipher.open(&envelope).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn envelope_is_nonce_then_ciphertext_with_tag() {
        let cipher = test_cipher();
        let plaintext = vec![0x42u8; 1000];

        let envelope = cipher.seal(&plaintext).unwrap();
        // 12-byte nonce, then ciphertext the size of the plaintext, then the
        // 16-byte GCM tag.
        assert_eq!(envelope.len(), NONCE_LEN + plaintext.len() + 16);
    }

    #[test]
    fn fresh_nonce_per_seal() {
        let cipher = test_cipher();
        let a = cipher.seal(b"same input").unwrap();
        let b = cipher.seal(b"same input").unwrap();
        assert_ne!(a[..NONCE_LEN], b[..NONCE_LEN]);
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let cipher = test_cipher();
        let other = ChunkCipher::from_key_bytes(b"abcdefghijklmnopqrstuvwxyz012345").unwrap();

        let envelope = cipher.seal(b"secret").unwrap();
        assert!(other.open(&envelope).is_err());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let cipher = test_cipher();
        let mut envelope = cipher.seal(b"secret").unwrap();
        let last = envelope.len() - 1;
        envelope[last] ^= 0xFF;
        assert!(cipher.open(&envelope).is_err());
    }

    #[test]
    fn truncated_envelope_is_rejected() {
        let cipher = test_cipher();
        assert!(cipher.open(&[0u8; NONCE_LEN - 1]).is_err());
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let cipher = test_cipher();
        let envelope = cipher.seal(b"").unwrap();
        assert!(cipher.open(&envelope).unwrap().is_empty());
    }

    #[test]
    fn key_must_be_32_bytes_after_decoding() {
        use base64::{engine::general_purpose, Engine as _};

        // 16 bytes: valid base64, wrong length.
        let short = general_purpose::STANDARD.encode([0u8; 16]);
        assert!(decode_key_base64(&short).is_err());

        // Not base64 at all.
        assert!(decode_key_base64("not//valid!!base64==").is_err());

        let ok = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_key_base64(&ok).unwrap().len(), KEY_LEN);
    }
}
