use std::env;

use crate::error::{JsbError, Result};

/// Request header carrying the public key
pub const PUBLIC_KEY_HEADER: &str = "jsb-pub-key";
/// Request header carrying the private key
pub const PRIVATE_KEY_HEADER: &str = "jsb-prv-key";

/// Environment variable holding the public key
pub const PUBLIC_KEY_ENV: &str = "JSB_PUBLIC_KEY";
/// Environment variable holding the private key
pub const PRIVATE_KEY_ENV: &str = "JSB_PRIVATE_KEY";

/// API key pair used to authenticate requests.
///
/// The public key grants read access to the account's own content;
/// create, update and delete operations additionally require the
/// private key.
#[derive(Clone)]
pub struct Keys {
    /// Public key identifier
    public: String,
    /// Private key, only needed for write operations
    private: Option<String>,
}

impl Keys {
    /// Create a key pair with both public and private keys
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Keys {
            public: public.into(),
            private: Some(private.into()),
        }
    }

    /// Create a read-only key holder from a public key
    pub fn public_only(public: impl Into<String>) -> Self {
        Keys {
            public: public.into(),
            private: None,
        }
    }

    /// Load keys from the `JSB_PUBLIC_KEY` and `JSB_PRIVATE_KEY`
    /// environment variables. The private key is optional.
    pub fn from_env() -> Result<Self> {
        let public = env::var(PUBLIC_KEY_ENV)
            .map_err(|_| JsbError::MissingEnv(PUBLIC_KEY_ENV.to_string()))?;

        Ok(Keys {
            public,
            private: env::var(PRIVATE_KEY_ENV).ok(),
        })
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public
    }

    /// Get the private key, failing if none was configured
    pub fn private_key(&self) -> Result<&str> {
        self.private.as_deref().ok_or(JsbError::NoPrivateKey)
    }

    /// Check if a private key is available
    pub fn has_private_key(&self) -> bool {
        self.private.is_some()
    }
}

// Implement Debug manually to avoid exposing the private key
impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keys")
            .field("public", &self.public)
            .field(
                "private",
                &self.private.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
