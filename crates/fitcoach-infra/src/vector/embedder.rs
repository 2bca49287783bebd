//! OpenAI-compatible embedding client.
//!
//! Implements the `Embedder` trait from `fitcoach-core` against a
//! `POST {base_url}/embeddings` endpoint (`{ model, input }` in,
//! `{ data: [{ embedding }] }` out).
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed when
//! building the `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use fitcoach_core::memory::embedder::Embedder;
use fitcoach_types::config::EmbeddingConfig;
use fitcoach_types::error::EmbeddingError;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embedding provider for any OpenAI-compatible `/embeddings` endpoint.
///
/// Does NOT derive Debug so the API key cannot leak through formatting.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    /// Build the client with `timeout_ms` as the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingError::Provider`] if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EmbeddingError::Provider(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            dimension: config.dimension,
        })
    }

    fn url(&self) -> String {
        format!("{}/embeddings", self.base_url)
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmbeddingError::Provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Provider(match status.as_u16() {
                401 => "authentication failed".to_string(),
                429 => "rate limited".to_string(),
                _ => format!("HTTP {status}: {error_body}"),
            }));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Provider(format!("failed to parse response: {e}")))?;

        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::Provider("response contained no embedding".into()))?;

        if self.dimension > 0 && embedding.len() != self.dimension {
            return Err(EmbeddingError::Dimension {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        tracing::debug!(model = %self.model, dimension = embedding.len(), "Embedded text");
        Ok(embedding)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
