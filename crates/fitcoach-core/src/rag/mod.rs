//! Retrieval-augmented chat: intent routing, prompt assembly, the chat
//! pipeline, and the indexing write path.

pub mod context;
pub mod indexer;
pub mod intent;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;
