//! Pinecone data-plane client.
//!
//! Implements the `VectorStore` trait from `fitcoach-core` over the index
//! host's REST API:
//!
//! - `POST {host}/vectors/upsert` with `{ vectors: [{ id, values, metadata }], namespace }`
//! - `POST {host}/query` with `{ vector, topK, filter, includeMetadata, namespace }`
//!
//! Every query carries a `userId` equality filter in addition to the
//! namespace when the caller supplies an owner.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use fitcoach_core::memory::vector::VectorStore;
use fitcoach_types::config::VectorStoreConfig;
use fitcoach_types::error::VectorStoreError;
use fitcoach_types::retrieval::{META_USER_ID, RetrievedMatch, VectorQuery, VectorRecord};

#[derive(Serialize)]
struct UpsertVector<'a> {
    id: &'a str,
    values: &'a [f32],
    metadata: Map<String, Value>,
}

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: Vec<UpsertVector<'a>>,
    namespace: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Value>,
    include_metadata: bool,
    namespace: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<RetrievedMatch>,
}

/// Vector index client for a single Pinecone index host.
///
/// Does NOT derive Debug so the API key cannot leak through formatting.
pub struct PineconeStore {
    client: reqwest::Client,
    api_key: SecretString,
    host: String,
}

impl PineconeStore {
    /// Pinecone REST API version header value.
    const API_VERSION: &'static str = "2025-01";

    /// # Errors
    ///
    /// Returns [`VectorStoreError::Provider`] if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, config: &VectorStoreConfig) -> Result<Self, VectorStoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| VectorStoreError::Provider(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            host: normalize_host(&config.host),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, VectorStoreError> {
        let response = self
            .client
            .post(self.url(path))
            .header("Api-Key", self.api_key.expose_secret())
            .header("X-Pinecone-API-Version", Self::API_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| VectorStoreError::Provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(VectorStoreError::Provider(match status.as_u16() {
                401 | 403 => "authentication failed".to_string(),
                429 => "rate limited".to_string(),
                _ => format!("HTTP {status}: {error_body}"),
            }));
        }
        Ok(response)
    }
}

impl VectorStore for PineconeStore {
    async fn upsert(&self, record: &VectorRecord, namespace: &str) -> Result<(), VectorStoreError> {
        let body = UpsertRequest {
            vectors: vec![UpsertVector {
                id: &record.id,
                values: &record.values,
                metadata: record.metadata.clone().into_map(),
            }],
            namespace,
        };

        self.post("/vectors/upsert", &body).await?;
        tracing::debug!(vector_id = %record.id, "Upserted vector");
        Ok(())
    }

    async fn query(
        &self,
        query: &VectorQuery,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>, VectorStoreError> {
        let filter = query
            .owner_filter
            .as_ref()
            .map(|owner| json!({ META_USER_ID: { "$eq": owner } }));

        let body = QueryRequest {
            vector: &query.vector,
            top_k: query.top_k,
            filter,
            include_metadata: true,
            namespace,
        };

        let response = self.post("/query", &body).await?;
        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| VectorStoreError::Provider(format!("failed to parse response: {e}")))?;

        let mut matches = parsed.matches;
        matches.truncate(query.top_k);
        Ok(matches)
    }
}

/// Index hosts are often copied from the console without a scheme.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
