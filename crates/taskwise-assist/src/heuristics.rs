//! Deterministic keyword-driven classifiers.
//!
//! These serve double duty: the sole mechanism in local-only mode, and the
//! safety net whenever the remote model fails or returns unusable output.
//! All matching is case-insensitive substring search over the task title
//! and description joined by a single space.

use taskwise_core::{
    CategoryResult, ParsedTask, PrioritySuggestion, Subtask, TagSuggestion, TaskBreakdown,
    TaskPriority, TaskRecord, TaskStatus, MAX_DERIVED_TITLE_CHARS, MAX_TAGS,
};

use crate::keywords::{
    CATEGORY_GROUPS, CATEGORY_OTHER, DEFERRABLE_KEYWORDS, PARSE_TAG_GROUPS, TAG_GROUPS,
    URGENCY_KEYWORDS,
};

/// Lowercased `title + " " + description` for keyword matching.
pub fn combined_text(title: &str, description: Option<&str>) -> String {
    format!("{} {}", title, description.unwrap_or("")).to_lowercase()
}

fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Names of every group with at least one keyword hit, declaration order.
fn matched_groups(text: &str, groups: &[(&str, &[&str])]) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, keywords)| matches_any(text, keywords))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Classify priority from urgency/deferrable keywords.
pub fn suggest_priority(title: &str, description: Option<&str>) -> PrioritySuggestion {
    let text = combined_text(title, description);

    if matches_any(&text, URGENCY_KEYWORDS) {
        PrioritySuggestion {
            priority: TaskPriority::High,
            reasoning: "Contains urgency keywords".to_string(),
        }
    } else if matches_any(&text, DEFERRABLE_KEYWORDS) {
        PrioritySuggestion {
            priority: TaskPriority::Low,
            reasoning: "Contains low-priority keywords".to_string(),
        }
    } else {
        PrioritySuggestion {
            priority: TaskPriority::Medium,
            reasoning: "Default priority".to_string(),
        }
    }
}

/// Suggest up to five tags from the ordered tag groups.
pub fn suggest_tags(title: &str, description: Option<&str>) -> TagSuggestion {
    let text = combined_text(title, description);
    let mut tags = matched_groups(&text, TAG_GROUPS);
    tags.truncate(MAX_TAGS);

    TagSuggestion {
        tags,
        reasoning: "Based on keyword matching".to_string(),
    }
}

/// Classify into the fixed category list: first match is primary, the next
/// up to two are subcategories, no match is "other".
pub fn categorize(title: &str, description: Option<&str>) -> CategoryResult {
    let text = combined_text(title, description);
    let mut matched = matched_groups(&text, CATEGORY_GROUPS);

    if matched.is_empty() {
        return CategoryResult {
            category: CATEGORY_OTHER.to_string(),
            subcategories: vec![],
            reasoning: "No category keywords matched".to_string(),
        };
    }

    let category = matched.remove(0);
    matched.truncate(2);

    CategoryResult {
        reasoning: format!("Matched keywords for '{}'", category),
        category,
        subcategories: matched,
    }
}

/// Fixed-shape three-step breakdown: plan, execute, review.
pub fn breakdown(title: &str) -> TaskBreakdown {
    let subtasks = vec![
        Subtask {
            title: format!("Plan: {}", title),
            description: Some("Define scope and requirements".to_string()),
            estimated_effort: Some("30 min".to_string()),
            order: 1,
        },
        Subtask {
            title: format!("Execute: {}", title),
            description: Some("Complete the main work".to_string()),
            estimated_effort: Some("2 hours".to_string()),
            order: 2,
        },
        Subtask {
            title: format!("Review: {}", title),
            description: Some("Review and verify completion".to_string()),
            estimated_effort: Some("30 min".to_string()),
            order: 3,
        },
    ];

    TaskBreakdown {
        subtasks,
        reasoning: "Generic plan-execute-review breakdown".to_string(),
    }
}

/// Templated summary sentence over status and priority counts.
pub fn summarize(tasks: &[TaskRecord]) -> String {
    if tasks.is_empty() {
        return "No tasks to summarize.".to_string();
    }

    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let in_progress = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let pending = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .count();
    let high_priority = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::High)
        .count();

    format!(
        "You have {} tasks: {} completed, {} in progress, {} pending. {} tasks are high priority.",
        total, completed, in_progress, pending, high_priority
    )
}

/// Heuristic draft extraction from raw free text.
pub fn parse_task(text: &str) -> ParsedTask {
    let title: String = text.chars().take(MAX_DERIVED_TITLE_CHARS).collect();
    let lowered = text.to_lowercase();

    let priority = suggest_priority(text, None).priority;
    let mut tags = matched_groups(&lowered, PARSE_TAG_GROUPS);
    tags.truncate(MAX_TAGS);

    ParsedTask {
        title,
        description: None,
        priority,
        tags,
        due_date: None,
        confidence: 0.5,
    }
}
