//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `fitcoach-core`, and a factory that builds it from the
//! `[completion]` config section.
//!
//! [`LlmProvider`]: fitcoach_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use fitcoach_core::llm::box_provider::BoxLlmProvider;
use fitcoach_types::config::CompletionConfig;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from the `[completion]` config section.
pub fn create_provider(config: &CompletionConfig, api_key: SecretString) -> BoxLlmProvider {
    let oai_config = openai_compat::config::from_completion_config(api_key, config);
    BoxLlmProvider::new(OpenAiCompatibleProvider::new(oai_config))
}
