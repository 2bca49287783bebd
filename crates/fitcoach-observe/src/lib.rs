//! Observability for the fitness coach service.
//!
//! - `tracing_setup`: global subscriber with optional OpenTelemetry export
//! - `genai_attrs`: GenAI semantic-convention names for provider-call spans

pub mod genai_attrs;
pub mod tracing_setup;
