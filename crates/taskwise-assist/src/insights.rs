//! Descriptive statistics and threshold-rule observations over a task
//! collection. Pure computation, no remote calls.

use std::collections::HashMap;

use taskwise_core::{TaskInsights, TaskPriority, TaskRecord, TaskStatus};

/// Compute distributions, completion rate, and derived insight and
/// recommendation strings for a task collection.
pub fn aggregate_insights(tasks: &[TaskRecord]) -> TaskInsights {
    if tasks.is_empty() {
        return TaskInsights::default();
    }

    let total = tasks.len();
    let mut by_status: HashMap<String, usize> = HashMap::new();
    let mut by_priority: HashMap<String, usize> = HashMap::new();
    let mut by_tag: HashMap<String, usize> = HashMap::new();
    // Tag order of first appearance, for deterministic tie-breaking.
    let mut tag_order: Vec<String> = Vec::new();

    for task in tasks {
        *by_status.entry(task.status.to_string()).or_insert(0) += 1;
        *by_priority.entry(task.priority.to_string()).or_insert(0) += 1;
        for tag in &task.tags {
            if !by_tag.contains_key(tag) {
                tag_order.push(tag.clone());
            }
            *by_tag.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let pending = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .count();
    let high_priority = tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::High)
        .count();

    let completion_rate = 100.0 * completed as f64 / total as f64;

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    if pending * 2 > total {
        insights.push("More than half of your tasks are still pending".to_string());
        recommendations.push("Consider prioritizing your backlog to make progress".to_string());
    }

    if high_priority > 3 {
        insights.push(format!("You have {} high-priority tasks", high_priority));
        recommendations.push("Address high-priority tasks first".to_string());
    }

    insights.push(format!("Your completion rate is {:.1}%", completion_rate));

    if !by_tag.is_empty() {
        let mut ranked: Vec<&String> = tag_order.iter().collect();
        // Stable sort keeps first-encountered order on tied counts.
        ranked.sort_by(|a, b| by_tag[*b].cmp(&by_tag[*a]));
        let top: Vec<&str> = ranked.iter().take(3).map(|t| t.as_str()).collect();
        insights.push(format!("Your most common tags: {}", top.join(", ")));
    }

    TaskInsights {
        total,
        by_status,
        by_priority,
        by_tag,
        completion_rate,
        insights,
        recommendations,
    }
}
