use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntryUpdatedV1 {
    pub content_entry_id: String,
    pub content: String,
    pub page_title: String,
    pub word_count: Option<i32>,
    pub updated_at: i64,
}
