//! Instruction builders for the remote model.
//!
//! Every prompt ends with an explicit output-format example so the response
//! can be located by brace search even when the model wraps it in prose.

use taskwise_core::TaskRecord;

/// Tasks beyond this count are omitted from the summary prompt.
pub const SUMMARY_TASK_LIMIT: usize = 20;

/// "Title: ..." plus an optional "Description: ..." line.
fn task_content(title: &str, description: Option<&str>) -> String {
    match description {
        Some(desc) if !desc.is_empty() => format!("Title: {}\nDescription: {}", title, desc),
        _ => format!("Title: {}", title),
    }
}

pub fn parse_task(text: &str) -> String {
    format!(
        r#"You are a task parser. Parse the following natural language input into a structured task.
Extract:
1. title: A clear, concise task title
2. description: Additional details if any
3. priority: "low", "medium", or "high" based on urgency words (urgent, asap, important = high; when possible, someday = low)
4. tags: Relevant category tags (e.g., ["shopping", "personal"], ["work", "meeting"])
5. due_date: If mentioned (format: YYYY-MM-DD HH:MM or just YYYY-MM-DD)
6. confidence: Your confidence in the parsing (0.0 to 1.0)

Input: "{}"

Respond ONLY with valid JSON in this exact format:
{{"title": "...", "description": "...", "priority": "medium", "tags": [], "due_date": null, "confidence": 0.9}}"#,
        text
    )
}

pub fn suggest_tags(title: &str, description: Option<&str>) -> String {
    format!(
        r#"Analyze this task and suggest 1-5 relevant tags.
Tags should be single words or short phrases, lowercase.

{}

Respond ONLY with valid JSON:
{{"tags": ["tag1", "tag2"], "reasoning": "Brief explanation"}}"#,
        task_content(title, description)
    )
}

pub fn suggest_priority(title: &str, description: Option<&str>) -> String {
    format!(
        r#"Analyze this task and suggest an appropriate priority level.
Consider urgency, impact, and deadlines mentioned.

{}

Respond ONLY with valid JSON:
{{"priority": "low|medium|high", "reasoning": "Brief explanation"}}"#,
        task_content(title, description)
    )
}

/// `count` is a recommendation passed through to the model, not enforced on
/// the response. `None` asks for the default 3-7 range.
pub fn breakdown(title: &str, description: Option<&str>, count: Option<usize>) -> String {
    let count_text = match count {
        Some(n) => n.to_string(),
        None => "3-7".to_string(),
    };
    format!(
        r#"Break down this task into {} actionable subtasks.
Each subtask should be specific, measurable, and achievable.

{}

Respond ONLY with valid JSON:
{{"subtasks": [{{"title": "...", "description": "...", "estimated_effort": "15 min|1 hour|etc", "order": 1}}], "reasoning": "..."}}"#,
        count_text,
        task_content(title, description)
    )
}

pub fn categorize(title: &str, description: Option<&str>) -> String {
    format!(
        r#"Categorize this task into exactly one primary category from this list:
work, personal, health, finance, learning, social, home, creative, urgent, shopping, other

You may also list up to 2 subcategories from the same list.

{}

Respond ONLY with valid JSON:
{{"category": "work", "subcategories": [], "reasoning": "Brief explanation"}}"#,
        task_content(title, description)
    )
}

pub fn summarize(tasks: &[TaskRecord]) -> String {
    let task_list = tasks
        .iter()
        .take(SUMMARY_TASK_LIMIT)
        .map(|t| format!("- [{}] {} (Priority: {})", t.status, t.title, t.priority))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Summarize these tasks in a brief, actionable summary.
Include: overall status, priorities, and recommendations.

Tasks:
{}

Provide a concise summary in 2-3 sentences."#,
        task_list
    )
}
