//! Coaching logic and provider trait definitions for the fitness coach.
//!
//! This crate defines the "ports" (embedder, vector store, LLM provider)
//! that the infrastructure layer implements, and the retrieval pipeline that
//! drives them. It depends on `fitcoach-types` and the span attribute names
//! in `fitcoach-observe` -- never on `fitcoach-infra` or any HTTP crate.

pub mod llm;
pub mod memory;
pub mod rag;
