//! Cosine similarity between embedding vectors.

/// Compute cosine similarity between two vectors.
///
/// Remote and local embeddings have different dimensionality; a comparison
/// across sources must not fail, so both vectors are truncated to the
/// shorter length before scoring. Returns 0.0 when either vector is empty
/// or has a zero norm.
///
/// The result is the plain cosine, not re-clamped: locally generated
/// vectors are non-negative so their scores land in [0, 1], while
/// arbitrary-signed remote vectors may score in [-1, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len = a.len().min(b.len());
    let a = &a[..len];
    let b = &b[..len];

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let a = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![0.3, 0.7, 0.1, 0.9];
        let b = vec![0.5, 0.2, 0.8, 0.4];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_empty_vector_scores_zero() {
        let a: Vec<f32> = vec![];
        let b = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
    }

    #[test]
    fn test_zero_norm_scores_zero() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_truncates_to_shorter() {
        // Must not fail, and must equal the same-length comparison.
        let long = vec![1.0, 0.0, 0.0];
        let short = vec![1.0, 0.0];
        let truncated = cosine_similarity(&long, &short);
        let reference = cosine_similarity(&[1.0, 0.0], &short);
        assert_eq!(truncated, reference);
        assert!((truncated - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_for_arbitrary_vectors() {
        let pairs = [
            (vec![1.0, -2.0, 3.0], vec![-4.0, 5.0, -6.0]),
            (vec![0.1, 0.1], vec![100.0, 0.0]),
            (vec![-1.0], vec![-1.0]),
        ];
        for (a, b) in pairs {
            let s = cosine_similarity(&a, &b);
            assert!((-1.0..=1.0 + 1e-6).contains(&(s as f64)), "score {}", s);
        }
    }

    #[test]
    fn test_non_negative_vectors_stay_in_unit_interval() {
        let a = vec![0.2, 0.0, 0.5, 0.1];
        let b = vec![0.0, 0.9, 0.3, 0.4];
        let s = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn test_magnitude_independence() {
        let a = vec![1.0, 2.0];
        let scaled: Vec<f32> = a.iter().map(|x| x * 10.0).collect();
        let b = vec![2.0, 1.0];
        let s1 = cosine_similarity(&a, &b);
        let s2 = cosine_similarity(&scaled, &b);
        assert!((s1 - s2).abs() < 1e-6);
    }
}
