//! Secret resolution.
//!
//! API keys are read from the environment only and handed around as
//! [`secrecy::SecretString`] so they never reach `Debug` output or logs.

pub mod env;

pub use env::{EnvSecretProvider, OPENAI_API_KEY, PINECONE_API_KEY};
