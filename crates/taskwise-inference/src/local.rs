//! Deterministic local fallback embedder.
//!
//! A crude per-character positional histogram, not a semantic embedding.
//! Its purpose is to keep the similarity pipeline functional when no remote
//! model is configured or reachable: identical text always maps to an
//! identical unit vector, so relative rankings remain stable and
//! reproducible. Shared character patterns are the only notion of
//! relevance it provides.

use async_trait::async_trait;

use taskwise_core::{EmbeddingBackend, Result, Vector};

/// Dimension of locally generated embeddings.
pub const LOCAL_EMBED_DIMENSION: usize = 256;

/// Only the first characters of each word contribute, with decaying weight.
const WORD_PREFIX_LEN: usize = 10;

/// Compute the deterministic fallback embedding for a text.
///
/// Algorithm: lowercase the input and split on whitespace. For each word,
/// take at most its first 10 characters; the character at position `i`
/// adds `1.0 / (i + 1)` to `vector[char_code % 256]`. The accumulated
/// vector is unit-normalized unless its norm is zero (e.g. whitespace-only
/// input), in which case the all-zero vector is returned unchanged.
pub fn local_embedding(text: &str) -> Vector {
    let mut vector = vec![0.0f32; LOCAL_EMBED_DIMENSION];

    for word in text.to_lowercase().split_whitespace() {
        for (i, c) in word.chars().take(WORD_PREFIX_LEN).enumerate() {
            let idx = (c as usize) % LOCAL_EMBED_DIMENSION;
            vector[idx] += 1.0 / (i as f32 + 1.0);
        }
    }

    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }

    vector
}

/// Embedding backend that never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct LocalEmbedder;

impl LocalEmbedder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmbeddingBackend for LocalEmbedder {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vector>> {
        Ok(texts.iter().map(|t| local_embedding(t)).collect())
    }

    fn dimension(&self) -> usize {
        LOCAL_EMBED_DIMENSION
    }

    fn model_name(&self) -> &str {
        "local-char-histogram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: &[f32]) -> f32 {
        v.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[test]
    fn test_embedding_is_deterministic() {
        let a = local_embedding("Remind me to buy groceries tomorrow");
        let b = local_embedding("Remind me to buy groceries tomorrow");
        assert_eq!(a, b, "same text must produce bit-identical vectors");
    }

    #[test]
    fn test_embedding_dimension() {
        assert_eq!(local_embedding("anything").len(), LOCAL_EMBED_DIMENSION);
    }

    #[test]
    fn test_embedding_is_unit_normalized() {
        let v = local_embedding("fix the login bug");
        assert!((norm(&v) - 1.0).abs() < 1e-5, "norm was {}", norm(&v));
    }

    #[test]
    fn test_whitespace_only_input_is_zero_vector() {
        let v = local_embedding("   \t\n  ");
        assert_eq!(v, vec![0.0; LOCAL_EMBED_DIMENSION]);
    }

    #[test]
    fn test_empty_input_is_zero_vector() {
        let v = local_embedding("");
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(local_embedding("Urgent Fix"), local_embedding("urgent fix"));
    }

    #[test]
    fn test_positional_weighting() {
        // Single word "ab": 'a' at position 0 contributes 1.0, 'b' at
        // position 1 contributes 0.5, then the vector is normalized.
        let v = local_embedding("ab");
        let a_idx = ('a' as usize) % LOCAL_EMBED_DIMENSION;
        let b_idx = ('b' as usize) % LOCAL_EMBED_DIMENSION;
        let expected_norm = (1.0f32 + 0.25).sqrt();
        assert!((v[a_idx] - 1.0 / expected_norm).abs() < 1e-6);
        assert!((v[b_idx] - 0.5 / expected_norm).abs() < 1e-6);
    }

    #[test]
    fn test_word_prefix_truncation() {
        // Characters past position 9 do not contribute.
        let a = local_embedding("abcdefghij");
        let b = local_embedding("abcdefghijzzzz");
        assert_eq!(a, b);
    }

    #[test]
    fn test_mixed_script_input() {
        // CJK code points land in buckets via modulo like any other char.
        let v = local_embedding("研究 AI 框架");
        assert!((norm(&v) - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_local_embedder_backend() {
        let embedder = LocalEmbedder::new();
        let vectors = embedder
            .embed_texts(&["one".to_string(), "two".to_string()])
            .await
            .unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(embedder.dimension(), LOCAL_EMBED_DIMENSION);
        assert_eq!(vectors[0], local_embedding("one"));
    }
}
