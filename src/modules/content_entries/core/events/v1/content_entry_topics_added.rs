use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntryTopicsAddedV1 {
    pub content_entry_id: String,
    pub topic_ids: Vec<String>,
    pub topics: Vec<String>,
    pub updated_at: i64,
}
