use serde::{Deserialize, Serialize};

/// A topic name in a user's catalog. Names are unique per user after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: i64,
}

/// Catalog form of a raw name, `None` when nothing is left after trimming.
pub fn normalize_topic_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
