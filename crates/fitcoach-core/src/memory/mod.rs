//! Embedding and vector-index ports.
//!
//! - `Embedder` / `BoxEmbedder`: text to fixed-length vector
//! - `VectorStore` / `BoxVectorStore`: namespaced upsert and similarity query

pub mod box_embedder;
pub mod box_vector;
pub mod embedder;
pub mod vector;
