//! Loose structured extraction from free-form model output.
//!
//! Two stages: locate the first top-level brace-delimited JSON object by
//! pattern search (models often wrap the payload in prose), then coerce it
//! into the strongly-typed result with per-field defaults. Any failure in
//! either stage is a [`Error::MalformedOutput`], which the engine absorbs
//! by falling back to heuristics.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::Deserialize;

use taskwise_core::{
    CategoryResult, Error, ParsedTask, PrioritySuggestion, Result, Subtask, TagSuggestion,
    TaskBreakdown, TaskPriority, MAX_DERIVED_TITLE_CHARS, MAX_TAGS,
};

use crate::keywords::{is_known_category, CATEGORY_OTHER};

fn json_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"))
}

/// Locate and parse the first brace-delimited JSON object in `text`.
pub fn json_object(text: &str) -> Result<serde_json::Value> {
    let matched = json_pattern()
        .find(text)
        .ok_or_else(|| Error::MalformedOutput("no JSON object found in response".to_string()))?;

    serde_json::from_str(matched.as_str())
        .map_err(|e| Error::MalformedOutput(format!("invalid JSON in response: {}", e)))
}

/// Keep a due date only if it is `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
fn validate_due_date(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let valid = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M").is_ok();
    valid.then_some(raw)
}

#[derive(Debug, Deserialize)]
struct RawParsedTask {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    due_date: Option<String>,
    confidence: Option<f32>,
}

/// Coerce a parse-operation response. `original_text` supplies the title
/// default when the model omits one.
pub fn parsed_task(response: &str, original_text: &str) -> Result<ParsedTask> {
    let value = json_object(response)?;
    let raw: RawParsedTask = serde_json::from_value(value)
        .map_err(|e| Error::MalformedOutput(format!("unexpected parse payload: {}", e)))?;

    // A priority string outside low/medium/high is malformed; a missing one
    // defaults to medium.
    let priority = match raw.priority {
        Some(p) => p
            .parse::<TaskPriority>()
            .map_err(Error::MalformedOutput)?,
        None => TaskPriority::Medium,
    };

    let title = match raw.title {
        Some(t) if !t.is_empty() => t,
        _ => original_text
            .chars()
            .take(MAX_DERIVED_TITLE_CHARS)
            .collect(),
    };

    let confidence = raw.confidence.unwrap_or(0.8);
    if !(0.0..=1.0).contains(&confidence) {
        return Err(Error::MalformedOutput(format!(
            "confidence out of range: {}",
            confidence
        )));
    }

    let mut tags = raw.tags;
    tags.truncate(MAX_TAGS);

    Ok(ParsedTask {
        title,
        description: raw.description.filter(|d| !d.is_empty()),
        priority,
        tags,
        due_date: validate_due_date(raw.due_date),
        confidence,
    })
}

#[derive(Debug, Deserialize)]
struct RawTagSuggestion {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    reasoning: String,
}

pub fn tag_suggestion(response: &str) -> Result<TagSuggestion> {
    let value = json_object(response)?;
    let raw: RawTagSuggestion = serde_json::from_value(value)
        .map_err(|e| Error::MalformedOutput(format!("unexpected tags payload: {}", e)))?;

    let mut tags = raw.tags;
    tags.truncate(MAX_TAGS);

    Ok(TagSuggestion {
        tags,
        reasoning: raw.reasoning,
    })
}

#[derive(Debug, Deserialize)]
struct RawPrioritySuggestion {
    priority: Option<String>,
    #[serde(default)]
    reasoning: String,
}

pub fn priority_suggestion(response: &str) -> Result<PrioritySuggestion> {
    let value = json_object(response)?;
    let raw: RawPrioritySuggestion = serde_json::from_value(value)
        .map_err(|e| Error::MalformedOutput(format!("unexpected priority payload: {}", e)))?;

    // Unlike parsing, an unknown priority here quietly becomes medium.
    let priority = raw
        .priority
        .and_then(|p| p.to_lowercase().parse::<TaskPriority>().ok())
        .unwrap_or(TaskPriority::Medium);

    Ok(PrioritySuggestion {
        priority,
        reasoning: raw.reasoning,
    })
}

#[derive(Debug, Deserialize)]
struct RawSubtask {
    #[serde(default)]
    title: String,
    description: Option<String>,
    estimated_effort: Option<String>,
    order: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawBreakdown {
    #[serde(default)]
    subtasks: Vec<RawSubtask>,
    #[serde(default)]
    reasoning: String,
}

pub fn breakdown(response: &str) -> Result<TaskBreakdown> {
    let value = json_object(response)?;
    let raw: RawBreakdown = serde_json::from_value(value)
        .map_err(|e| Error::MalformedOutput(format!("unexpected breakdown payload: {}", e)))?;

    let subtasks = raw
        .subtasks
        .into_iter()
        .enumerate()
        .map(|(i, st)| Subtask {
            title: st.title,
            description: st.description,
            estimated_effort: st.estimated_effort,
            // Missing order falls back to 1-based position.
            order: st.order.unwrap_or(i as u32 + 1),
        })
        .collect();

    Ok(TaskBreakdown {
        subtasks,
        reasoning: raw.reasoning,
    })
}

#[derive(Debug, Deserialize)]
struct RawCategoryResult {
    category: Option<String>,
    #[serde(default)]
    subcategories: Vec<String>,
    #[serde(default)]
    reasoning: String,
}

pub fn category_result(response: &str) -> Result<CategoryResult> {
    let value = json_object(response)?;
    let raw: RawCategoryResult = serde_json::from_value(value)
        .map_err(|e| Error::MalformedOutput(format!("unexpected category payload: {}", e)))?;

    let category = raw
        .category
        .map(|c| c.to_lowercase())
        .unwrap_or_else(|| CATEGORY_OTHER.to_string());
    if !is_known_category(&category) {
        return Err(Error::MalformedOutput(format!(
            "unknown category: {}",
            category
        )));
    }

    let mut subcategories: Vec<String> = raw
        .subcategories
        .into_iter()
        .map(|s| s.to_lowercase())
        .filter(|s| is_known_category(s) && *s != category)
        .collect();
    subcategories.truncate(2);

    Ok(CategoryResult {
        category,
        subcategories,
        reasoning: raw.reasoning,
    })
}
