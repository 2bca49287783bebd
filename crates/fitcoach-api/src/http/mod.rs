//! HTTP/REST API layer for the fitness coach.
//!
//! Axum-based JSON API with permissive CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod testing;
