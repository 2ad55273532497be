//! # taskwise-assist
//!
//! The assistance engine: turns free-form text and task collections into
//! structured suggestions, embeddings, similarity rankings, and summaries.
//!
//! Every operation runs in one of two modes, chosen once at engine
//! construction: remote-model-backed when an API key is configured, or a
//! deterministic keyword/heuristic fallback. Remote failures of any kind
//! degrade to the fallback — assistance operations never fail the caller
//! except on invalid input.
//!
//! ## Example
//!
//! ```
//! use taskwise_assist::AssistEngine;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let engine = AssistEngine::local_only();
//! let parsed = engine.parse_task("Urgent: fix the login bug").await.unwrap();
//! assert_eq!(parsed.priority.to_string(), "high");
//! # }
//! ```

pub mod engine;
pub mod extract;
pub mod heuristics;
pub mod insights;
pub mod keywords;
pub mod prompts;

// Re-export core types
pub use taskwise_core::*;

pub use engine::AssistEngine;
pub use insights::aggregate_insights;
