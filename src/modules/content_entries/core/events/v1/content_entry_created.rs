use crate::modules::content_entries::core::entry::{ContentEntryStatus, ContentType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntryCreatedV1 {
    pub content_entry_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub content_type: ContentType,
    pub content: String,
    pub source_url: Option<String>,
    pub page_title: String,
    pub word_count: Option<i32>,
    pub video_duration: Option<i32>,
    pub youtube_video_id: Option<String>,
    pub status: ContentEntryStatus,
    /// Pre-linked topics, only set when an analyzed entry is cloned.
    pub topic_ids: Vec<String>,
    pub created_at: i64,
}
