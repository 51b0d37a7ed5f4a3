use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntryDeletedV1 {
    pub content_entry_id: String,
    pub content_bank_id: String,
    pub deleted_at: i64,
}
