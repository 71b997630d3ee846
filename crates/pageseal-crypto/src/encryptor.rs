//! The [`Encryptor`] seam between the token codec and the cipher layer.

use crate::error::EncryptionError;

/// Symmetric encryption of opaque token payloads.
///
/// Implementations hold only fixed key material and no other state, so a
/// single instance may be shared freely across threads. Every call draws a
/// fresh IV/nonce from the OS CSPRNG; encrypting the same plaintext twice
/// yields different ciphertext.
pub trait Encryptor {
    /// Encrypt `plaintext`, returning the raw ciphertext with the IV/nonce
    /// prefix already prepended.
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError`] if the cipher cannot be constructed from
    /// the configured key material.
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, EncryptionError>;

    /// Decrypt ciphertext previously produced by [`Encryptor::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError::CiphertextTooShort`] if the input cannot
    /// even hold the IV/nonce prefix, and [`EncryptionError::AeadFailure`]
    /// if an authenticated cipher rejects the ciphertext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError>;
}

impl<T: Encryptor + ?Sized> Encryptor for Box<T> {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, EncryptionError> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        (**self).decrypt(ciphertext)
    }
}
