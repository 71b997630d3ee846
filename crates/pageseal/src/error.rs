//! Error types for the strict token decode path.

use pageseal_crypto::EncryptionError;
use thiserror::Error;

/// Errors surfaced when a page token cannot be decoded.
///
/// Only the strict [`TokenCodec::decode`](crate::token::TokenCodec::decode)
/// path reports these; the tolerant accessors convert every variant into a
/// strategy-appropriate default.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The decrypted payload is missing the `TYPE#VALUE` separator or is not
    /// valid UTF-8.
    #[error("invalid page token")]
    InvalidPageToken,

    /// The external token text is not valid hexadecimal.
    #[error("page token is not valid hex")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// Encryption or decryption failed.
    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    /// The payload carries a pagination type tag this crate does not know.
    #[error("unknown pagination type: {0:?}")]
    UnknownPaginationType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_unknown_tag() {
        let e = TokenError::UnknownPaginationType("SCROLL".into());
        assert!(e.to_string().contains("SCROLL"));
    }
}
