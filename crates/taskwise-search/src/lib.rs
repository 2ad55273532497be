//! # taskwise-search
//!
//! Similarity scoring and ranking over embedded task records.
//!
//! This crate provides:
//! - Cosine similarity tolerant of mismatched vector dimensions
//! - Stable descending ranking of (entity, vector) candidates
//! - Semantic search over task records with stored embeddings
//!
//! ## Example
//!
//! ```
//! use taskwise_search::{cosine_similarity, rank_by_similarity};
//!
//! let query = vec![1.0, 0.0];
//! let candidates = vec![("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])];
//! let ranked = rank_by_similarity(&query, candidates, 10);
//! assert_eq!(ranked[0].0, "a");
//! ```

pub mod ranking;
pub mod similarity;

// Re-export core types
pub use taskwise_core::*;

pub use ranking::{rank_by_similarity, rank_tasks, ScoredTask};
pub use similarity::cosine_similarity;
