//! Bilingual keyword tables for the heuristic classifiers.
//!
//! Keyword sets are plain data; the matching routine lives in
//! [`crate::heuristics`]. Every table carries English and Chinese triggers
//! and the union is checked for each classification. Group declaration
//! order is significant: tag and category results preserve it, and the
//! first matching category group becomes the primary category.

/// Keywords that promote a task to high priority.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent", "asap", "important", "critical", "blocker", "紧急", "重要", "立即",
];

/// Keywords that demote a task to low priority.
pub const DEFERRABLE_KEYWORDS: &[&str] = &[
    "someday",
    "maybe",
    "when possible",
    "nice to have",
    "低优先",
    "空闲",
];

/// Ordered tag groups for tag suggestion.
pub const TAG_GROUPS: &[(&str, &[&str])] = &[
    (
        "development",
        &["code", "bug", "feature", "api", "database", "开发", "代码"],
    ),
    ("meeting", &["meeting", "call", "discussion", "sync", "会议"]),
    (
        "documentation",
        &["doc", "write", "document", "readme", "文档"],
    ),
    ("design", &["design", "ui", "ux", "mockup", "设计"]),
    ("testing", &["test", "qa", "quality", "测试"]),
    ("research", &["research", "investigate", "explore", "研究"]),
];

/// Ordered tag groups used when parsing raw free text into a draft.
pub const PARSE_TAG_GROUPS: &[(&str, &[&str])] = &[
    (
        "work",
        &["work", "meeting", "project", "report", "工作", "会议"],
    ),
    ("personal", &["personal", "home", "family", "个人", "家"]),
    (
        "shopping",
        &["buy", "shop", "purchase", "groceries", "购买", "购物"],
    ),
    (
        "health",
        &["doctor", "gym", "exercise", "health", "健康", "运动"],
    ),
];

/// The fixed category list, in declaration order. The first match is the
/// primary category; the next two become subcategories.
pub const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    (
        "work",
        &[
            "work", "meeting", "project", "deadline", "client", "report", "工作", "会议", "项目",
        ],
    ),
    (
        "personal",
        &["personal", "family", "friend", "birthday", "个人", "家庭"],
    ),
    (
        "health",
        &[
            "health", "doctor", "gym", "exercise", "medical", "健康", "运动", "医生",
        ],
    ),
    (
        "finance",
        &[
            "finance", "money", "budget", "invoice", "tax", "bank", "财务", "账单", "报销",
        ],
    ),
    (
        "learning",
        &[
            "learn", "study", "course", "tutorial", "read", "学习", "课程", "阅读",
        ],
    ),
    (
        "social",
        &["party", "social", "dinner", "event", "gathering", "聚会", "社交"],
    ),
    (
        "home",
        &["clean", "repair", "garden", "chore", "laundry", "打扫", "维修", "家务"],
    ),
    (
        "creative",
        &["design", "draw", "music", "paint", "create", "创作", "设计", "写作"],
    ),
    ("urgent", &["urgent", "asap", "immediately", "紧急", "立即"]),
    (
        "shopping",
        &["buy", "shop", "purchase", "order", "groceries", "购买", "购物"],
    ),
];

/// Fallback category when no group matches.
pub const CATEGORY_OTHER: &str = "other";

/// Whether `name` is a valid category (one of the fixed groups or "other").
pub fn is_known_category(name: &str) -> bool {
    name == CATEGORY_OTHER || CATEGORY_GROUPS.iter().any(|(group, _)| *group == name)
}
