//! Service configuration types.
//!
//! `FitcoachConfig` represents the top-level `fitcoach.toml`. Every section
//! and field has a default, so an empty file (or no file) is a valid config.
//! API keys are deliberately absent: they come from the environment only.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the fitness coach service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitcoachConfig {
    pub server: ServerConfig,
    pub embedding: EmbeddingConfig,
    pub vector_store: VectorStoreConfig,
    pub completion: CompletionConfig,
    pub retrieval: RetrievalConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".into(),
        }
    }
}

/// Embedding provider settings (OpenAI-compatible `/embeddings`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub base_url: String,
    pub model: String,
    pub dimension: usize,
    pub timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "text-embedding-3-small".into(),
            dimension: 1536,
            timeout_ms: 5_000,
        }
    }
}

/// Vector index settings (Pinecone-compatible data plane).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Index host, e.g. `https://fitness-abc123.svc.us-east-1.pinecone.io`.
    pub host: String,
    pub timeout_ms: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            timeout_ms: 5_000,
        }
    }
}

/// Chat-completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_ms: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 500,
            temperature: 0.7,
            timeout_ms: 30_000,
        }
    }
}

/// Retrieval and prompt-assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Upper bound on matches fed into the prompt.
    pub top_k: usize,
    /// Matches scoring below this are dropped before prompt assembly.
    pub min_score: f32,
    /// Most recent chat-history turns forwarded to the model.
    pub history_limit: usize,
    /// Route messages to a specialised persona by keyword.
    pub intent_routing: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_score: 0.0,
            history_limit: 10,
            intent_routing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FitcoachConfig::default();
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.embedding.timeout_ms, 5_000);
        assert_eq!(config.vector_store.timeout_ms, 5_000);
        assert_eq!(config.completion.timeout_ms, 30_000);
        assert!(config.retrieval.intent_routing);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: FitcoachConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.embedding.model, "text-embedding-3-small");
    }

    #[test]
    fn test_deserialize_partial_section() {
        let toml_str = r#"
[retrieval]
top_k = 3

[completion]
model = "gpt-4o"
"#;
        let config: FitcoachConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.retrieval.history_limit, 10);
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.max_tokens, 500);
    }
}
