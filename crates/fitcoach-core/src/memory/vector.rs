//! Vector store trait.
//!
//! Defines the interface for namespaced similarity search over embedded
//! activities and profiles. Implementations (e.g., Pinecone) live in
//! fitcoach-infra.

use fitcoach_types::error::VectorStoreError;
use fitcoach_types::retrieval::{RetrievedMatch, VectorQuery, VectorRecord};

/// Trait for a namespaced vector index.
///
/// The namespace is the owning user's id. It partitions one user's vectors
/// from another's; it is not a security boundary by itself.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait VectorStore: Send + Sync {
    /// Insert or replace a vector and its metadata.
    fn upsert(
        &self,
        record: &VectorRecord,
        namespace: &str,
    ) -> impl std::future::Future<Output = Result<(), VectorStoreError>> + Send;

    /// Search for the vectors most similar to `query.vector`.
    ///
    /// Returns at most `query.top_k` matches ordered by descending score.
    /// Ties keep the provider's ordering.
    fn query(
        &self,
        query: &VectorQuery,
        namespace: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RetrievedMatch>, VectorStoreError>> + Send;
}
