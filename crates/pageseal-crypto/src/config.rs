//! Configuration loading and validation for the encryption layer.
//!
//! Values are read from `PAGE_TOKEN_*` environment variables. There is no
//! compiled-in default secret key: a deployment that forgets to configure one
//! fails at startup instead of silently encrypting under a known key.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cfb::AesCfbEncryptor;
use crate::encryptor::Encryptor;
use crate::siv::{AesGcmSivEncryptor, KEY_LEN as SIV_KEY_LEN};

/// Cipher selection for [`EncryptionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// AES-CFB with a random IV. Unauthenticated; the wire-format default.
    AesCfb,
    /// AES-256-GCM-SIV. Authenticated; recommended for new deployments.
    AesGcmSiv,
}

/// Validated encryption configuration.
#[derive(Clone, Deserialize)]
pub struct EncryptionConfig {
    /// Secret key for page token encryption. **Required.** 16, 24 or 32
    /// bytes for AES-CFB; exactly 32 bytes for AES-GCM-SIV.
    pub secret_key: String,

    /// Which cipher to construct.
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
}

fn default_algorithm() -> Algorithm {
    Algorithm::AesCfb
}

impl std::fmt::Debug for EncryptionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.debug_struct("EncryptionConfig")
            .field("secret_key", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl EncryptionConfig {
    /// Load and validate configuration from `PAGE_TOKEN_*` environment
    /// variables (`PAGE_TOKEN_SECRET_KEY`, `PAGE_TOKEN_ALGORITHM`).
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is absent or its length does not
    /// match the selected algorithm.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("PAGE_TOKEN"))
            .build()
            .context("failed to build encryption configuration from environment")?;

        let c: EncryptionConfig = cfg
            .try_deserialize()
            .context("failed to deserialise encryption configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate the key length against the selected algorithm.
    fn validate(&self) -> Result<()> {
        let len = self.secret_key.len();
        match self.algorithm {
            Algorithm::AesCfb if matches!(len, 16 | 24 | 32) => Ok(()),
            Algorithm::AesGcmSiv if len == SIV_KEY_LEN => Ok(()),
            Algorithm::AesCfb => {
                anyhow::bail!("PAGE_TOKEN_SECRET_KEY must be 16, 24 or 32 bytes, got {len}")
            }
            Algorithm::AesGcmSiv => anyhow::bail!(
                "PAGE_TOKEN_SECRET_KEY must be {SIV_KEY_LEN} bytes for aes-gcm-siv, got {len}"
            ),
        }
    }

    /// Construct the configured [`Encryptor`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key length does not match the algorithm.
    pub fn build(&self) -> Result<Box<dyn Encryptor + Send + Sync>> {
        let encryptor: Box<dyn Encryptor + Send + Sync> = match self.algorithm {
            Algorithm::AesCfb => Box::new(AesCfbEncryptor::new(self.secret_key.as_bytes())?),
            Algorithm::AesGcmSiv => Box::new(AesGcmSivEncryptor::new(self.secret_key.as_bytes())?),
        };
        Ok(encryptor)
    }
}
