//! Infrastructure layer for the fitness coach service.
//!
//! Contains implementations of the provider traits defined in
//! `fitcoach-core`: the OpenAI-compatible embedding and chat-completion
//! clients, the Pinecone vector index client, plus config file loading and
//! environment secret lookup.

pub mod config;
pub mod llm;
pub mod secret;
pub mod vector;
