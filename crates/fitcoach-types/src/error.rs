use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("unexpected embedding dimension: expected {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },

    #[error("embedding timed out after {0}ms")]
    Timeout(u64),
}

/// Errors from the vector store provider.
#[derive(Debug, Error)]
pub enum VectorStoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vector store provider error: {0}")]
    Provider(String),

    #[error("vector store timed out after {0}ms")]
    Timeout(u64),
}

/// Errors surfaced by the chat pipeline.
///
/// Embedding and retrieval failures never appear here: the pipeline degrades
/// instead of failing.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),
}

/// Errors from the activity indexing (write) path.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    VectorStore(#[from] VectorStoreError),
}

/// Errors while assembling runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingSecret(&'static str),

    #[error("{section}.{field} must be set")]
    MissingValue {
        section: &'static str,
        field: &'static str,
    },
}
