use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntryQuestionsGeneratedV1 {
    pub content_entry_id: String,
    pub updated_at: i64,
}
