//! Environment variable secret provider.
//!
//! Read-only lookup of API keys by variable name. Blank values count as
//! missing so an exported-but-empty variable fails fast at startup instead
//! of producing 401s on the first request.

use secrecy::SecretString;

use fitcoach_types::error::ConfigError;

/// Key for both the embedding and completion endpoints.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Key for the vector index data plane.
pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up a secret. Unset, blank, or non-Unicode values read as `None`.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val.trim().to_string())),
            _ => None,
        }
    }

    /// Look up a secret that must be present.
    pub fn require(&self, key: &'static str) -> Result<SecretString, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingSecret(key))
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
