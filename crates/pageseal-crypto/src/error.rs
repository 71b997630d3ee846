//! Error types for the encryption layer.

use thiserror::Error;

/// Errors produced by [`Encryptor`](crate::Encryptor) implementations.
#[derive(Debug, Error)]
pub enum EncryptionError {
    /// The secret key has a length no supported AES variant accepts.
    #[error("invalid secret key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// The ciphertext is shorter than its leading IV/nonce prefix.
    #[error("ciphertext too short: {len} bytes (minimum {min})")]
    CiphertextTooShort { len: usize, min: usize },

    /// Authenticated decryption failed — wrong key or tampered ciphertext.
    #[error("aead operation failed")]
    AeadFailure,
}
