//! Embedding and vector index clients.
//!
//! - `embedder`: OpenAI-compatible `/embeddings` client
//! - `pinecone`: Pinecone data-plane client (upsert and filtered query)

pub mod embedder;
pub mod pinecone;
