//! Shared domain types for the fitness coach service.
//!
//! Activities, vector records and matches, chat exchanges, LLM message
//! shapes, configuration, and the error types that cross crate boundaries.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod activity;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod retrieval;
