//! Symmetric encryption primitives for opaque page tokens.
//!
//! This crate is intentionally free of pagination and serialisation concerns.
//! It provides the [`Encryptor`] seam the token codec encrypts through, plus
//! two interchangeable cipher implementations selected via [`EncryptionConfig`].
//!
//! # Ciphertext format
//!
//! ```text
//! <IV/nonce prefix><cipher output>
//! ```
//!
//! The prefix is 16 bytes for AES-CFB and 12 bytes for AES-256-GCM-SIV; the
//! rest of the token pipeline treats the whole sequence as opaque bytes.

pub mod cfb;
pub mod config;
pub mod encryptor;
pub mod error;
pub mod siv;

pub use cfb::AesCfbEncryptor;
pub use config::{Algorithm, EncryptionConfig};
pub use encryptor::Encryptor;
pub use error::EncryptionError;
pub use siv::AesGcmSivEncryptor;
