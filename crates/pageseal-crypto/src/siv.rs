//! AES-256-GCM-SIV variant of the [`Encryptor`] seam.
//!
//! Authenticated and nonce-misuse-resistant (RFC 8452): tampering with the
//! ciphertext is detected at decrypt time instead of yielding garbage
//! plaintext. Selected via configuration for new deployments; the token
//! layout is unchanged apart from the 12-byte nonce prefix replacing the
//! 16-byte CFB IV.

use aes_gcm_siv::{
    aead::{Aead, KeyInit, OsRng},
    Aes256GcmSiv, Nonce,
};

use crate::encryptor::Encryptor;
use crate::error::EncryptionError;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM-SIV [`Encryptor`] drawing a fresh random nonce per call.
#[derive(Clone)]
pub struct AesGcmSivEncryptor {
    cipher: Aes256GcmSiv,
}

impl std::fmt::Debug for AesGcmSivEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("AesGcmSivEncryptor([REDACTED])")
    }
}

impl AesGcmSivEncryptor {
    /// Build an encryptor from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError::InvalidKeyLength`] unless the key is
    /// exactly [`KEY_LEN`] bytes.
    pub fn new(secret_key: &[u8]) -> Result<Self, EncryptionError> {
        if secret_key.len() != KEY_LEN {
            return Err(EncryptionError::InvalidKeyLength(secret_key.len()));
        }
        let cipher = Aes256GcmSiv::new_from_slice(secret_key)
            .map_err(|_| EncryptionError::InvalidKeyLength(secret_key.len()))?;
        Ok(Self { cipher })
    }
}

impl Encryptor for AesGcmSivEncryptor {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, EncryptionError> {
        // Use OsRng for a cryptographically secure random nonce.
        use aes_gcm_siv::aead::rand_core::RngCore;
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let body = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| EncryptionError::AeadFailure)?;

        let mut out = Vec::with_capacity(NONCE_LEN + body.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        if ciphertext.len() < NONCE_LEN {
            return Err(EncryptionError::CiphertextTooShort {
                len: ciphertext.len(),
                min: NONCE_LEN,
            });
        }
        let (nonce, body) = ciphertext.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| EncryptionError::AeadFailure)
    }
}
