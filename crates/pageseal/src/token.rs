//! Opaque page token encoding and decoding.
//!
//! Tokens are encrypted so holders cannot see internal query implementation
//! details, then hex-encoded so they travel inside URLs and JSON strings
//! without further escaping. The decrypted payload is `TYPE#VALUE`:
//!
//! ```text
//! OFFSET#100
//! KEY_SET#name > Foo
//! CURSOR#abc-foo
//! ```

use std::fmt;

use pageseal_crypto::Encryptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TokenError;
use crate::key_set::KeySet;

/// Reserved separator between the pagination type tag and its value.
const SEPARATOR: char = '#';

/// Pagination strategy carried by a page token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaginationType {
    /// Skip-N pagination; the value is a decimal offset.
    Offset,
    /// Resume after a field comparison; the value is a rendered [`KeySet`].
    KeySet,
    /// Opaque resume marker; the value is free text.
    Cursor,
}

impl PaginationType {
    /// Wire tag, the first segment of the decrypted payload.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Offset => "OFFSET",
            Self::KeySet => "KEY_SET",
            Self::Cursor => "CURSOR",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "OFFSET" => Some(Self::Offset),
            "KEY_SET" => Some(Self::KeySet),
            "CURSOR" => Some(Self::Cursor),
            _ => None,
        }
    }
}

impl fmt::Display for PaginationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An opaque pagination continuation marker.
///
/// The inner text is lowercase hex of the encrypted payload. The empty token
/// is the valid "start from the beginning" sentinel, never an error. Tokens
/// are created by [`TokenCodec`] when a page is produced and consumed
/// read-only by the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// The "no token" sentinel.
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Whether this is the "no token" sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the external hex text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The external hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PageToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PageToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Encodes and decodes [`PageToken`]s through a configured [`Encryptor`].
///
/// Stateless apart from the encryptor's fixed key; safe to share across
/// request-handling threads.
pub struct TokenCodec<E> {
    encryptor: E,
}

impl<E> fmt::Debug for TokenCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenCodec")
    }
}

impl<E: Encryptor> TokenCodec<E> {
    /// Build a codec around an encryptor.
    pub fn new(encryptor: E) -> Self {
        Self { encryptor }
    }

    /// Encode `TYPE#VALUE`, encrypt it, and hex-encode the ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encryption`] if the encryptor fails.
    pub fn encode(
        &self,
        pagination_type: PaginationType,
        value: &str,
    ) -> Result<PageToken, TokenError> {
        let payload = format!("{}{SEPARATOR}{value}", pagination_type.tag());
        let ciphertext = self.encryptor.encrypt(&payload)?;
        Ok(PageToken(hex::encode(ciphertext)))
    }

    /// Offset convenience encoder.
    ///
    /// A negative offset yields the empty token rather than an error, so
    /// callers can pass "before the first page" and get the sentinel back.
    pub fn encode_offset(&self, value: i64) -> Result<PageToken, TokenError> {
        if value < 0 {
            return Ok(PageToken::none());
        }
        self.encode(PaginationType::Offset, &value.to_string())
    }

    /// Cursor convenience encoder.
    pub fn encode_cursor(&self, cursor: &str) -> Result<PageToken, TokenError> {
        self.encode(PaginationType::Cursor, cursor)
    }

    /// Key-set convenience encoder; serializes the key set first.
    pub fn encode_key_set(&self, set: &KeySet) -> Result<PageToken, TokenError> {
        self.encode(PaginationType::KeySet, &set.to_string())
    }

    /// Strict decode: hex-decode, decrypt, and split on the reserved
    /// separator.
    ///
    /// Returns `Ok(None)` for the empty token — absent is not malformed, and
    /// strict callers need to tell the two apart.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidEncoding`] if the text is not hex,
    /// [`TokenError::Encryption`] if decryption fails,
    /// [`TokenError::InvalidPageToken`] if the payload is not UTF-8 or lacks
    /// the separator, and [`TokenError::UnknownPaginationType`] for a tag
    /// outside the closed set.
    pub fn decode(
        &self,
        token: &PageToken,
    ) -> Result<Option<(PaginationType, String)>, TokenError> {
        if token.is_empty() {
            return Ok(None);
        }
        let ciphertext = hex::decode(token.as_str())?;
        let plaintext = self.encryptor.decrypt(&ciphertext)?;
        let payload = String::from_utf8(plaintext).map_err(|_| TokenError::InvalidPageToken)?;
        let Some((tag, value)) = payload.split_once(SEPARATOR) else {
            return Err(TokenError::InvalidPageToken);
        };
        let pagination_type =
            PaginationType::from_tag(tag).ok_or_else(|| TokenError::UnknownPaginationType(tag.to_owned()))?;
        Ok(Some((pagination_type, value.to_owned())))
    }

    /// Tolerant offset accessor: absent token, type mismatch, or any decode
    /// failure yields `0`.
    pub fn offset_or_default(&self, token: &PageToken) -> i64 {
        self.value_or_default(token, PaginationType::Offset)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Tolerant cursor accessor: defaults to the empty string.
    pub fn cursor_or_default(&self, token: &PageToken) -> String {
        self.value_or_default(token, PaginationType::Cursor)
            .unwrap_or_default()
    }

    /// Tolerant key-set accessor: defaults to the zero-value [`KeySet`].
    pub fn key_set_or_default(&self, token: &PageToken) -> KeySet {
        self.value_or_default(token, PaginationType::KeySet)
            .and_then(|value| match value.parse() {
                Ok(set) => Some(set),
                Err(err) => {
                    debug!(%err, "malformed key-set payload, falling back to default");
                    None
                }
            })
            .unwrap_or_default()
    }

    fn value_or_default(&self, token: &PageToken, want: PaginationType) -> Option<String> {
        match self.decode(token) {
            Ok(Some((got, value))) if got == want => Some(value),
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "malformed page token, falling back to default");
                None
            }
        }
    }
}
