//! BoxVectorStore -- object-safe dynamic dispatch wrapper for VectorStore.
//!
//! Follows the same blanket-impl pattern as BoxLlmProvider:
//! 1. Define an object-safe `VectorStoreDyn` trait with boxed futures
//! 2. Blanket-impl `VectorStoreDyn` for all `T: VectorStore`
//! 3. `BoxVectorStore` wraps `Box<dyn VectorStoreDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use fitcoach_types::error::VectorStoreError;
use fitcoach_types::retrieval::{RetrievedMatch, VectorQuery, VectorRecord};

use super::vector::VectorStore;

/// Object-safe version of [`VectorStore`] with boxed futures.
pub trait VectorStoreDyn: Send + Sync {
    fn upsert_boxed<'a>(
        &'a self,
        record: &'a VectorRecord,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), VectorStoreError>> + Send + 'a>>;

    fn query_boxed<'a>(
        &'a self,
        query: &'a VectorQuery,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedMatch>, VectorStoreError>> + Send + 'a>>;
}

impl<T: VectorStore> VectorStoreDyn for T {
    fn upsert_boxed<'a>(
        &'a self,
        record: &'a VectorRecord,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), VectorStoreError>> + Send + 'a>> {
        Box::pin(self.upsert(record, namespace))
    }

    fn query_boxed<'a>(
        &'a self,
        query: &'a VectorQuery,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedMatch>, VectorStoreError>> + Send + 'a>>
    {
        Box::pin(self.query(query, namespace))
    }
}

/// Type-erased vector store for runtime backend selection.
pub struct BoxVectorStore {
    inner: Box<dyn VectorStoreDyn + Send + Sync>,
}

impl BoxVectorStore {
    /// Wrap a concrete `VectorStore` in a type-erased box.
    pub fn new<T: VectorStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    /// Insert or replace a vector in `namespace`.
    pub async fn upsert(
        &self,
        record: &VectorRecord,
        namespace: &str,
    ) -> Result<(), VectorStoreError> {
        check_namespace(namespace)?;
        if record.values.is_empty() {
            return Err(VectorStoreError::InvalidInput(
                "vector values must not be empty".into(),
            ));
        }
        self.inner.upsert_boxed(record, namespace).await
    }

    /// Similarity search in `namespace`.
    ///
    /// The result is truncated to `query.top_k` even if the backend returns
    /// more.
    pub async fn query(
        &self,
        query: &VectorQuery,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>, VectorStoreError> {
        check_namespace(namespace)?;
        if query.top_k == 0 {
            return Ok(Vec::new());
        }
        let mut matches = self.inner.query_boxed(query, namespace).await?;
        matches.truncate(query.top_k);
        Ok(matches)
    }
}

fn check_namespace(namespace: &str) -> Result<(), VectorStoreError> {
    if namespace.trim().is_empty() {
        return Err(VectorStoreError::InvalidInput(
            "namespace must not be empty".into(),
        ));
    }
    Ok(())
}
