//! AES-CFB encryption with a random per-call IV.
//!
//! # Ciphertext format
//!
//! ```text
//! <16-byte IV><CFB keystream output>
//! ```
//!
//! CFB is a stream mode: output length is exactly `IV_LEN + plaintext.len()`.
//! The mode is unauthenticated — a tampered ciphertext decrypts to different
//! bytes rather than failing. Deployments that need tamper detection should
//! select [`AesGcmSivEncryptor`](crate::siv::AesGcmSivEncryptor) instead.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use rand::{rngs::OsRng, RngCore};

use crate::encryptor::Encryptor;
use crate::error::EncryptionError;

/// Byte length of the AES block, and therefore of the CFB IV.
pub const IV_LEN: usize = 16;

type Aes128CfbEnc = cfb_mode::Encryptor<Aes128>;
type Aes128CfbDec = cfb_mode::Decryptor<Aes128>;
type Aes192CfbEnc = cfb_mode::Encryptor<Aes192>;
type Aes192CfbDec = cfb_mode::Decryptor<Aes192>;
type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// Key material for one of the three AES variants, chosen by key length.
#[derive(Clone)]
enum AesKey {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

impl Drop for AesKey {
    fn drop(&mut self) {
        // Zero the key material on drop.
        match self {
            AesKey::Aes128(k) => k.iter_mut().for_each(|b| *b = 0),
            AesKey::Aes192(k) => k.iter_mut().for_each(|b| *b = 0),
            AesKey::Aes256(k) => k.iter_mut().for_each(|b| *b = 0),
        }
    }
}

/// AES-CFB [`Encryptor`] drawing a fresh random IV per encryption call.
#[derive(Clone)]
pub struct AesCfbEncryptor {
    key: AesKey,
}

impl std::fmt::Debug for AesCfbEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("AesCfbEncryptor([REDACTED])")
    }
}

impl AesCfbEncryptor {
    /// Build an encryptor from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError::InvalidKeyLength`] unless the key is 16, 24
    /// or 32 bytes (AES-128/192/256).
    pub fn new(secret_key: &[u8]) -> Result<Self, EncryptionError> {
        let key = match secret_key.len() {
            16 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(secret_key);
                AesKey::Aes128(k)
            }
            24 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(secret_key);
                AesKey::Aes192(k)
            }
            32 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(secret_key);
                AesKey::Aes256(k)
            }
            n => return Err(EncryptionError::InvalidKeyLength(n)),
        };
        Ok(Self { key })
    }

    fn encrypt_in_place(&self, iv: &[u8], buf: &mut [u8]) -> Result<(), EncryptionError> {
        match &self.key {
            AesKey::Aes128(k) => Aes128CfbEnc::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .encrypt(buf),
            AesKey::Aes192(k) => Aes192CfbEnc::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .encrypt(buf),
            AesKey::Aes256(k) => Aes256CfbEnc::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .encrypt(buf),
        }
        Ok(())
    }

    fn decrypt_in_place(&self, iv: &[u8], buf: &mut [u8]) -> Result<(), EncryptionError> {
        match &self.key {
            AesKey::Aes128(k) => Aes128CfbDec::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .decrypt(buf),
            AesKey::Aes192(k) => Aes192CfbDec::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .decrypt(buf),
            AesKey::Aes256(k) => Aes256CfbDec::new_from_slices(k, iv)
                .map_err(|_| EncryptionError::InvalidKeyLength(k.len()))?
                .decrypt(buf),
        }
        Ok(())
    }
}

impl Encryptor for AesCfbEncryptor {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, EncryptionError> {
        // IV needs to be unique, but not secret; it travels with the ciphertext.
        let mut out = vec![0u8; IV_LEN + plaintext.len()];
        OsRng.fill_bytes(&mut out[..IV_LEN]);
        out[IV_LEN..].copy_from_slice(plaintext.as_bytes());

        let (iv, body) = out.split_at_mut(IV_LEN);
        self.encrypt_in_place(iv, body)?;
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        if ciphertext.len() < IV_LEN {
            return Err(EncryptionError::CiphertextTooShort {
                len: ciphertext.len(),
                min: IV_LEN,
            });
        }
        let (iv, body) = ciphertext.split_at(IV_LEN);
        let mut out = body.to_vec();
        self.decrypt_in_place(iv, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_256: &[u8; 32] = b"an-insecure-32-byte-test-key-00!";

    #[test]
    fn round_trip_all_key_sizes() {
        for key in [&b"0123456789abcdef"[..], &b"0123456789abcdef01234567"[..], &KEY_256[..]] {
            let enc = AesCfbEncryptor::new(key).unwrap();
            let ciphertext = enc.encrypt("OFFSET#100").unwrap();
            let plaintext = enc.decrypt(&ciphertext).unwrap();
            assert_eq!(plaintext, b"OFFSET#100");
        }
    }

    #[test]
    fn rejects_unsupported_key_length() {
        let err = AesCfbEncryptor::new(b"short").unwrap_err();
        assert!(matches!(err, EncryptionError::InvalidKeyLength(5)));
    }

    #[test]
    fn ciphertext_length_is_iv_plus_plaintext() {
        let enc = AesCfbEncryptor::new(KEY_256).unwrap();
        let ciphertext = enc.encrypt("abc").unwrap();
        assert_eq!(ciphertext.len(), IV_LEN + 3);
    }

    #[test]
    fn fresh_iv_per_call() {
        let enc = AesCfbEncryptor::new(KEY_256).unwrap();
        let a = enc.encrypt("same input").unwrap();
        let b = enc.encrypt("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn decrypt_rejects_truncated_ciphertext() {
        let enc = AesCfbEncryptor::new(KEY_256).unwrap();
        let err = enc.decrypt(&[0u8; 5]).unwrap_err();
        assert!(matches!(err, EncryptionError::CiphertextTooShort { len: 5, min: 16 }));
    }

    #[test]
    fn bit_flip_changes_plaintext_without_failing() {
        let enc = AesCfbEncryptor::new(KEY_256).unwrap();
        let mut ciphertext = enc.encrypt("OFFSET#100").unwrap();
        // Flip a bit in the body; CFB has no authentication so this must
        // decrypt to different bytes, not crash.
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x01;
        let plaintext = enc.decrypt(&ciphertext).unwrap();
        assert_ne!(plaintext, b"OFFSET#100");
    }

    #[test]
    fn debug_never_prints_key_material() {
        let enc = AesCfbEncryptor::new(KEY_256).unwrap();
        assert!(format!("{enc:?}").contains("REDACTED"));
    }
}
