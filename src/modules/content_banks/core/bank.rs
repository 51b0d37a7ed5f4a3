use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBank {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
    /// Number of events applied, used as the outbox stream version.
    pub version: i64,
}

pub fn normalize_bank_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn copy_name(original: &str) -> String {
    format!("Copy of {original}")
}
