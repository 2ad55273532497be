//! # taskwise-inference
//!
//! Remote-model backend abstraction for taskwise.
//!
//! This crate provides:
//! - OpenAI-compatible chat completion and embeddings client
//! - Deterministic local fallback embedder (no remote dependency)
//! - Backend configuration from environment variables
//! - Mock inference backend for testing (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use taskwise_inference::{OpenAiBackend, RemoteConfig};
//! use taskwise_core::EmbeddingBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAiBackend::new(RemoteConfig::from_env()).unwrap();
//!     let texts = vec!["Buy groceries".to_string()];
//!     let embeddings = backend.embed_texts(&texts).await.unwrap();
//! }
//! ```

pub mod config;
pub mod local;
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use taskwise_core::*;

pub use config::RemoteConfig;
pub use local::{local_embedding, LocalEmbedder, LOCAL_EMBED_DIMENSION};
pub use openai::OpenAiBackend;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockInferenceBackend;
