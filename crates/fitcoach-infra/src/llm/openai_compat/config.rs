//! Configuration for OpenAI-compatible chat-completion providers.

use secrecy::SecretString;

use fitcoach_types::config::CompletionConfig;

/// Base URL of the public OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Default model when a request leaves `model` empty.
    pub model: String,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Configuration from the `[completion]` section.
///
/// The provider name is `openai` for the public endpoint and `openai_compat`
/// for anything else (local gateways, proxies).
pub fn from_completion_config(api_key: SecretString, config: &CompletionConfig) -> OpenAiCompatConfig {
    let base_url = config.base_url.trim_end_matches('/').to_string();
    let provider_name = if base_url == OPENAI_BASE_URL {
        "openai"
    } else {
        "openai_compat"
    };

    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url,
        api_key,
        model: config.model.clone(),
    }
}
