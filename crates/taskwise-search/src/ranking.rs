//! Ranking of embedded candidates against a query vector.

use tracing::debug;

use taskwise_core::TaskRecord;

use crate::similarity::cosine_similarity;

/// A task record paired with its similarity score.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoredTask {
    pub task: TaskRecord,
    pub similarity_score: f32,
}

/// Score candidates against a query vector, sort descending, truncate.
///
/// The sort is stable: candidates with tied scores keep their input order,
/// which callers rely on when the input reflects recency.
pub fn rank_by_similarity<T>(
    query: &[f32],
    candidates: Vec<(T, Vec<f32>)>,
    limit: usize,
) -> Vec<(T, f32)> {
    let mut scored: Vec<(T, f32)> = candidates
        .into_iter()
        .map(|(entity, vector)| {
            let score = cosine_similarity(query, &vector);
            (entity, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);

    debug!(result_count = scored.len(), "Similarity ranking complete");
    scored
}

/// Rank task records against a query vector.
///
/// Records without a stored embedding are silently excluded; that is a
/// normal state for freshly created tasks, not an error.
pub fn rank_tasks(query: &[f32], tasks: &[TaskRecord], limit: usize) -> Vec<ScoredTask> {
    let candidates: Vec<(&TaskRecord, Vec<f32>)> = tasks
        .iter()
        .filter_map(|t| t.embedding.as_ref().map(|e| (t, e.clone())))
        .collect();

    rank_by_similarity(query, candidates, limit)
        .into_iter()
        .map(|(task, similarity_score)| ScoredTask {
            task: task.clone(),
            similarity_score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskwise_core::{TaskPriority, TaskStatus};
    use uuid::Uuid;

    fn task(title: &str, embedding: Option<Vec<f32>>) -> TaskRecord {
        TaskRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            tags: vec![],
            embedding,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_rank_orders_descending() {
        let query = vec![1.0, 0.0];
        let candidates = vec![
            ("far", vec![0.0, 1.0]),
            ("near", vec![1.0, 0.0]),
            ("mid", vec![1.0, 1.0]),
        ];

        let ranked = rank_by_similarity(&query, candidates, 10);
        assert_eq!(ranked[0].0, "near");
        assert_eq!(ranked[1].0, "mid");
        assert_eq!(ranked[2].0, "far");
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let query = vec![1.0];
        let candidates = vec![("a", vec![1.0]), ("b", vec![1.0]), ("c", vec![1.0])];
        let ranked = rank_by_similarity(&query, candidates, 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let query = vec![1.0, 0.0];
        // All candidates score identically; input order must survive.
        let candidates = vec![
            ("first", vec![1.0, 0.0]),
            ("second", vec![2.0, 0.0]),
            ("third", vec![0.5, 0.0]),
        ];

        let ranked = rank_by_similarity(&query, candidates, 10);
        let order: Vec<&str> = ranked.iter().map(|(e, _)| *e).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty_candidates() {
        let ranked = rank_by_similarity::<&str>(&[1.0, 0.0], vec![], 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_tasks_skips_missing_embeddings() {
        let query = vec![1.0, 0.0];
        let tasks = vec![
            task("no embedding", None),
            task("match", Some(vec![1.0, 0.0])),
            task("also none", None),
        ];

        let ranked = rank_tasks(&query, &tasks, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].task.title, "match");
        assert!((ranked[0].similarity_score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rank_tasks_mismatched_dimensions_do_not_panic() {
        // A remote-dimension query against local-dimension stored vectors.
        let query = vec![1.0; 1536];
        let tasks = vec![task("local", Some(vec![0.5; 256]))];
        let ranked = rank_tasks(&query, &tasks, 5);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_rank_tasks_limit() {
        let query = vec![1.0];
        let tasks: Vec<TaskRecord> = (0..10)
            .map(|i| task(&format!("t{}", i), Some(vec![1.0])))
            .collect();
        let ranked = rank_tasks(&query, &tasks, 3);
        assert_eq!(ranked.len(), 3);
        // Stable sort keeps creation order on tied scores.
        assert_eq!(ranked[0].task.title, "t0");
    }
}
