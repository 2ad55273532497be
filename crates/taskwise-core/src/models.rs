//! Task records and the structured results produced by assistance operations.
//!
//! Everything here is transient: records are supplied by the caller's
//! persistence layer and results are handed back to it. No type in this
//! module is mutated in place by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Embedding vector. Remote and local embeddings have different
/// dimensionality; similarity handles the mismatch by truncation.
pub type Vector = Vec<f32>;

/// Maximum number of suggested tags per task.
pub const MAX_TAGS: usize = 5;

/// Titles derived from free text are capped at this many characters.
pub const MAX_DERIVED_TITLE_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid task priority: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Task record
// ---------------------------------------------------------------------------

/// A task record as supplied by the external persistence layer.
///
/// The engine reads these (for similarity, summaries, and insights) but
/// never stores them. The stored embedding, when present, was produced by a
/// previous call to the engine and attached by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stored embedding for semantic search, if one has been computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vector>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Title and description joined by a single space, the canonical text
    /// fed to embedding and keyword matching.
    pub fn content_text(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.title, desc),
            None => format!("{} ", self.title),
        }
    }
}

// ---------------------------------------------------------------------------
// Assistance results
// ---------------------------------------------------------------------------

/// Structured task draft extracted from free-form text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` when present.
    pub due_date: Option<String>,
    /// Extraction confidence in [0, 1].
    pub confidence: f32,
}

/// One step of a task breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    pub description: Option<String>,
    /// Free-text effort estimate, e.g. "30 min" or "2 hours".
    pub estimated_effort: Option<String>,
    /// 1-based position in the breakdown.
    pub order: u32,
}

/// Result of breaking a task into subtasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBreakdown {
    pub subtasks: Vec<Subtask>,
    pub reasoning: String,
}

/// Suggested tags for a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub tags: Vec<String>,
    pub reasoning: String,
}

/// Suggested priority for a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySuggestion {
    pub priority: TaskPriority,
    pub reasoning: String,
}

/// Categorization result: a primary category, up to two subcategories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    pub subcategories: Vec<String>,
    pub reasoning: String,
}

/// Descriptive statistics and derived observations over a task collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInsights {
    pub total: usize,
    pub by_status: std::collections::HashMap<String, usize>,
    pub by_priority: std::collections::HashMap<String, usize>,
    pub by_tag: std::collections::HashMap<String, usize>,
    /// Percentage of completed tasks, 0.0 when the collection is empty.
    pub completion_rate: f64,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(title: &str, description: Option<&str>) -> TaskRecord {
        TaskRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.map(str::to_string),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            tags: vec![],
            embedding: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_task_status_display() {
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_task_status_from_str() {
        assert_eq!(TaskStatus::from_str("pending").unwrap(), TaskStatus::Pending);
        assert_eq!(
            TaskStatus::from_str("IN_PROGRESS").unwrap(),
            TaskStatus::InProgress
        );
        assert!(TaskStatus::from_str("done").is_err());
    }

    #[test]
    fn test_task_status_serde_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: TaskStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn test_task_priority_display_and_parse() {
        for (priority, s) in [
            (TaskPriority::Low, "low"),
            (TaskPriority::Medium, "medium"),
            (TaskPriority::High, "high"),
        ] {
            assert_eq!(priority.to_string(), s);
            assert_eq!(TaskPriority::from_str(s).unwrap(), priority);
        }
        assert!(TaskPriority::from_str("urgent").is_err());
    }

    #[test]
    fn test_task_priority_default_is_medium() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn test_task_record_content_text_with_description() {
        let rec = record("Fix bug", Some("in the login flow"));
        assert_eq!(rec.content_text(), "Fix bug in the login flow");
    }

    #[test]
    fn test_task_record_content_text_without_description() {
        // Missing description is treated as an empty string after the join.
        let rec = record("Fix bug", None);
        assert_eq!(rec.content_text(), "Fix bug ");
    }

    #[test]
    fn test_task_record_serde_roundtrip() {
        let rec = TaskRecord {
            id: Uuid::new_v4(),
            title: "Write weekly report".to_string(),
            description: None,
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            tags: vec!["work".to_string()],
            embedding: Some(vec![0.5, 0.5]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&rec).unwrap();
        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, rec.title);
        assert_eq!(back.status, TaskStatus::Completed);
        assert_eq!(back.embedding, Some(vec![0.5, 0.5]));
    }

    #[test]
    fn test_task_record_embedding_omitted_when_none() {
        let rec = record("Plain", None);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("embedding"));
    }

    #[test]
    fn test_task_record_tags_default_on_missing_field() {
        let json = format!(
            r#"{{"id":"{}","title":"t","description":null,"status":"pending",
                "priority":"low","created_at":"2026-01-01T00:00:00Z",
                "updated_at":"2026-01-01T00:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let rec: TaskRecord = serde_json::from_str(&json).unwrap();
        assert!(rec.tags.is_empty());
        assert!(rec.embedding.is_none());
    }

    #[test]
    fn test_parsed_task_serde() {
        let parsed = ParsedTask {
            title: "Buy groceries".to_string(),
            description: None,
            priority: TaskPriority::Medium,
            tags: vec!["shopping".to_string()],
            due_date: Some("2026-09-01".to_string()),
            confidence: 0.9,
        };

        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Buy groceries");
        assert_eq!(back.due_date.as_deref(), Some("2026-09-01"));
        assert!((back.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_task_insights_default() {
        let insights = TaskInsights::default();
        assert_eq!(insights.total, 0);
        assert!(insights.by_status.is_empty());
        assert!(insights.insights.is_empty());
        assert!(insights.recommendations.is_empty());
        assert_eq!(insights.completion_rate, 0.0);
    }
}
